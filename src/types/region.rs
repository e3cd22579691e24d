//! Cloud regions that host the text-to-speech service.
//!
//! The region identifier is substituted verbatim into the endpoint templates in
//! [`crate::client::EndpointSet`]; nothing here validates that a `Custom` region exists.

string_table! {
    /// Region hosting the speech resource.
    ///
    /// See <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/regions>
    #[derive(Default)]
    pub enum Region {
        /// Australia East (Sydney)
        AustraliaEast => "australiaeast",
        /// Brazil South (Sao Paulo)
        BrazilSouth => "brazilsouth",
        /// Canada Central (Toronto)
        CanadaCentral => "canadacentral",
        /// Central US (Iowa)
        CentralUS => "centralus",
        /// East Asia (Hong Kong)
        EastAsia => "eastasia",
        /// East US (Virginia)
        #[default]
        EastUS => "eastus",
        /// East US 2 (Virginia)
        EastUS2 => "eastus2",
        /// France Central (Paris)
        FranceCentral => "francecentral",
        /// India Central (Pune)
        IndiaCentral => "indiacentral",
        /// Japan East (Tokyo)
        JapanEast => "japaneast",
        /// Japan West (Osaka)
        JapanWest => "japanwest",
        /// Korea Central (Seoul)
        KoreaCentral => "koreacentral",
        /// North Central US (Illinois)
        NorthCentralUS => "northcentralus",
        /// North Europe (Ireland)
        NorthEurope => "northeurope",
        /// South Central US (Texas)
        SouthCentralUS => "southcentralus",
        /// Southeast Asia (Singapore)
        SoutheastAsia => "southeastasia",
        /// UK South (London)
        UKSouth => "uksouth",
        /// West Europe (Netherlands)
        WestEurope => "westeurope",
        /// West US (California)
        WestUS => "westus",
        /// West US 2 (Washington)
        WestUS2 => "westus2",
    }
}
