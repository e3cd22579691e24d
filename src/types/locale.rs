//! Language tags accepted by the synthesis endpoint.

string_table! {
    /// BCP-47 style locale placed in the `xml:lang` attributes of the payload.
    ///
    /// See <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/language-support>
    pub enum Locale {
        ArEg => "ar-EG",
        ArSa => "ar-SA",
        BgBg => "bg-BG",
        CaEs => "ca-ES",
        CsCz => "cs-CZ",
        DaDk => "da-DK",
        DeAt => "de-AT",
        DeCh => "de-CH",
        DeDe => "de-DE",
        ElGr => "el-GR",
        EnAu => "en-AU",
        EnCa => "en-CA",
        EnGb => "en-GB",
        EnIe => "en-IE",
        EnIn => "en-IN",
        EnUs => "en-US",
        EsEs => "es-ES",
        EsMx => "es-MX",
        EtEe => "et-EE",
        FiFi => "fi-FI",
        FrCa => "fr-CA",
        FrCh => "fr-CH",
        FrFr => "fr-FR",
        GaIe => "ga-IE",
        HeIl => "he-IL",
        HiIn => "hi-IN",
        HrHr => "hr-HR",
        HuHu => "hu-HU",
        IdId => "id-ID",
        ItIt => "it-IT",
        JaJp => "ja-JP",
        KoKr => "ko-KR",
        LtLt => "lt-LT",
        LvLv => "lv-LV",
        MtMt => "mt-MT",
        MrIn => "mr-IN",
        MsMy => "ms-MY",
        NbNo => "nb-NO",
        NlNl => "nl-NL",
        PlPl => "pl-PL",
        PtBr => "pt-BR",
        PtPt => "pt-PT",
        RoRo => "ro-RO",
        RuRu => "ru-RU",
        SkSk => "sk-SK",
        SlSi => "sl-SI",
        SvSe => "sv-SE",
        TaIn => "ta-IN",
        TeIn => "te-IN",
        ThTh => "th-TH",
        TrTr => "tr-TR",
        ViVn => "vi-VN",
        ZhCn => "zh-CN",
        ZhHk => "zh-HK",
        ZhTw => "zh-TW",
    }
}
