//! Enumerated parameter domains accepted by the Scrapeless tools
//!
//! Closed sets with a fixed, short list of values are Rust enums. Large
//! vendor-defined sets (Google domains, Trends locations and categories)
//! are static tables checked at the schema boundary.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $value)] $variant),+
        }

        impl $name {
            /// Wire values, in declaration order
            pub const VARIANTS: &'static [&'static str] = &[$($value),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum! {
    /// Page event the renderer waits for before capturing content
    JsWaitUntil {
        Load => "load",
        DomContentLoaded => "domcontentloaded",
        NetworkIdle0 => "networkidle0",
        NetworkIdle2 => "networkidle2",
    }
}

string_enum! {
    /// Structured extraction applied to a scraped page
    ScrapeOutput {
        PhoneNumbers => "phone_numbers",
        Headings => "headings",
        Images => "images",
        Audios => "audios",
        Videos => "videos",
        Links => "links",
        Menus => "menus",
        Hashtags => "hashtags",
        Emails => "emails",
        Metadata => "metadata",
        Tables => "tables",
        Favicon => "favicon",
    }
}

string_enum! {
    /// Representation returned by universal scraping
    ResponseType {
        Html => "html",
        Plaintext => "plaintext",
        Markdown => "markdown",
        Png => "png",
        Jpeg => "jpeg",
    }
}

impl ResponseType {
    /// Screenshot responses accept the full-page flag
    pub fn is_image(self) -> bool {
        matches!(self, ResponseType::Png | ResponseType::Jpeg)
    }
}

string_enum! {
    /// Adult content filtering level
    SafeSearch {
        Active => "active",
        Off => "off",
    }
}

string_enum! {
    /// Google's `"1"` / `"0"` switch parameters (`nfpr`, `filter`)
    Toggle {
        On => "1",
        Off => "0",
    }
}

string_enum! {
    /// Google vertical selected through `tbm`
    SearchType {
        Images => "isch",
        Local => "lcl",
        News => "nws",
        Shopping => "shop",
        Videos => "vid",
        Patents => "pts",
        Jobs => "jobs",
    }
}

string_enum! {
    /// Google Trends report kind
    TrendsDataType {
        Autocomplete => "autocomplete",
        InterestOverTime => "interest_over_time",
        ComparedBreakdownByRegion => "compared_breakdown_by_region",
        InterestBySubregion => "interest_by_subregion",
        RelatedQueries => "related_queries",
        RelatedTopics => "related_topics",
    }
}

string_enum! {
    /// Output format of a crawler scrape
    ScrapeFormat {
        Markdown => "markdown",
        RawHtml => "rawHtml",
        FullPageScreenshot => "screenshot@fullPage",
        Json => "json",
        Links => "links",
        Screenshot => "screenshot",
        Html => "html",
    }
}

/// Codes of [`TRENDS_CATEGORIES`]
pub fn trends_category_codes() -> Vec<&'static str> {
    TRENDS_CATEGORIES.iter().map(|(code, _)| *code).collect()
}

/// Google domains accepted by the search actor
pub const GOOGLE_DOMAINS: &[&str] = &[
    "google.com", "google.ad", "google.ae", "google.com.af", "google.com.ag",
    "google.com.ai", "google.al", "google.am", "google.co.ao", "google.com.ar",
    "google.as", "google.at", "google.com.au", "google.az", "google.ba",
    "google.com.bd", "google.be", "google.bf", "google.bg", "google.com.bh",
    "google.bi", "google.bj", "google.com.bn", "google.com.bo", "google.com.br",
    "google.bs", "google.bt", "google.co.bw", "google.by", "google.com.bz",
    "google.ca", "google.com.kh", "google.cd", "google.cf", "google.cg",
    "google.ch", "google.ci", "google.co.ck", "google.cl", "google.cm",
    "google.com.co", "google.co.cr", "google.com.cu", "google.cv", "google.com.cy",
    "google.cz", "google.de", "google.dj", "google.dk", "google.dm",
    "google.com.do", "google.dz", "google.com.ec", "google.ee", "google.com.eg",
    "google.es", "google.com.et", "google.fi", "google.fm", "google.com.fj",
    "google.fr", "google.ga", "google.ge", "google.com.gh", "google.com.gi",
    "google.gl", "google.gm", "google.gp", "google.gr", "google.com.gt",
    "google.gy", "google.com.hk", "google.hn", "google.hr", "google.ht",
    "google.hu", "google.co.id", "google.iq", "google.ie", "google.co.il",
    "google.co.in", "google.is", "google.it", "google.je", "google.com.jm",
    "google.jo", "google.co.jp", "google.co.ke", "google.ki", "google.kg",
    "google.co.kr", "google.com.kw", "google.kz", "google.la", "google.com.lb",
    "google.li", "google.lk", "google.co.ls", "google.lt", "google.lu",
    "google.lv", "google.com.ly", "google.co.ma", "google.md", "google.mg",
    "google.mk", "google.ml", "google.com.mm", "google.mn", "google.ms",
    "google.com.mt", "google.mu", "google.mv", "google.mw", "google.com.mx",
    "google.com.my", "google.co.mz", "google.com.na", "google.ne", "google.com.ng",
    "google.com.ni", "google.nl", "google.no", "google.com.np", "google.nr",
    "google.nu", "google.co.nz", "google.com.om", "google.com.pk", "google.com.pa",
    "google.com.pe", "google.com.ph", "google.pl", "google.com.pg", "google.com.pr",
    "google.ps", "google.pt", "google.com.py", "google.com.qa", "google.ro",
    "google.rs", "google.ru", "google.rw", "google.com.sa", "google.com.sb",
    "google.sc", "google.se", "google.com.sg", "google.sh", "google.si",
    "google.sk", "google.com.sl", "google.sn", "google.sm", "google.so",
    "google.sr", "google.com.sv", "google.td", "google.tg", "google.co.th",
    "google.com.tj", "google.tk", "google.tl", "google.tm", "google.to",
    "google.tn", "google.com.tr", "google.tt", "google.com.tw", "google.co.tz",
    "google.com.ua", "google.co.ug", "google.co.uk", "google.com.uy", "google.co.uz",
    "google.com.vc", "google.co.ve", "google.vg", "google.co.vi", "google.com.vn",
    "google.vu", "google.ws", "google.co.za", "google.co.zm", "google.co.zw",
];

/// Google Trends locations; the empty string means worldwide
pub const TRENDS_GEOS: &[&str] = &[
    "", "AR", "AU", "AT", "BE", "BR", "CA", "CL", "CO", "CZ",
    "DK", "EG", "FI", "FR", "DE", "GR", "HK", "HU", "IN", "ID",
    "IE", "IL", "IT", "JP", "KE", "MY", "MX", "NL", "NZ", "NG",
    "NO", "PE", "PH", "PL", "PT", "RO", "RU", "SA", "SG", "ZA",
    "KR", "ES", "SE", "CH", "TW", "TH", "TR", "UA", "GB", "US",
    "VN",
];

/// Google Trends categories as `(code, name)`
pub const TRENDS_CATEGORIES: &[(&str, &str)] = &[
    ("0", "all_categories"),
    ("3", "arts_entertainment"),
    ("5", "computers_electronics"),
    ("7", "finance"),
    ("8", "games"),
    ("11", "home_garden"),
    ("12", "business_industrial"),
    ("13", "internet_telecom"),
    ("14", "people_society"),
    ("16", "news"),
    ("18", "shopping"),
    ("19", "law_government"),
    ("20", "sports"),
    ("22", "books_literature"),
    ("23", "performing_arts"),
    ("24", "visual_art_design"),
    ("25", "advertising_marketing"),
    ("28", "office_services"),
    ("29", "real_estate"),
    ("30", "computer_hardware"),
    ("31", "programming"),
    ("32", "software"),
    ("33", "offbeat"),
    ("34", "movies"),
    ("35", "music_audio"),
    ("36", "tv_video"),
    ("37", "banking"),
    ("38", "insurance"),
    ("39", "card_games"),
    ("41", "computer_video_games"),
    ("42", "jazz"),
    ("43", "online_goodies"),
    ("44", "beauty_fitness"),
    ("45", "health"),
    ("46", "agriculture_forestry"),
    ("47", "autos_vehicles"),
    ("48", "construction_maintenance"),
    ("49", "manufacturing"),
    ("50", "transportation_logistics"),
    ("53", "web_hosting_domain_registration"),
    ("54", "social_issues_advocacy"),
    ("55", "dating_personals"),
    ("56", "ethnic_identity_groups"),
    ("57", "charity_philanthropy"),
    ("58", "parenting"),
    ("59", "religion_belief"),
    ("60", "jobs"),
    ("61", "classifieds"),
    ("63", "weather"),
    ("64", "antiques_collectibles"),
    ("65", "hobbies_leisure"),
    ("66", "pets_animals"),
    ("67", "travel"),
    ("68", "apparel"),
    ("69", "consumer_resources"),
    ("70", "gifts_special_event_items"),
    ("71", "food_drink"),
    ("73", "mass_merchants_department_stores"),
    ("74", "education"),
    ("75", "legal"),
    ("76", "government"),
    ("77", "enterprise_technology"),
    ("78", "consumer_electronics"),
    ("82", "environmental_issues"),
    ("83", "marketing_services"),
    ("84", "seo_marketing"),
    ("89", "vehicle_parts_accessories"),
    ("91", "stereo_systems_components"),
    ("93", "skin_nail_care"),
    ("94", "fitness"),
    ("95", "office_supplies"),
    ("96", "real_estate_agencies"),
    ("97", "consumer_advocacy_protection"),
    ("98", "fashion_designers_collections"),
    ("99", "gifts_2"),
    ("100", "cards_greetings"),
    ("101", "spirituality"),
    ("102", "personals"),
    ("104", "isps"),
    ("105", "online_games"),
    ("107", "investing"),
    ("108", "language_resources"),
    ("112", "broadcast_network_news"),
    ("113", "gay_lesbian_bisexual_transgender"),
    ("115", "baby_care_hygiene"),
    ("118", "water_sports"),
    ("119", "wildlife"),
    ("120", "cookware_diningware"),
    ("121", "grocery_food_retailers"),
    ("122", "cooking_recipes"),
    ("123", "tobacco_products"),
    ("124", "clothing_accessories"),
    ("137", "homemaking_interior_decor"),
    ("138", "vehicle_maintenance"),
    ("143", "face_body_care"),
    ("144", "unwanted_body_facial_hair_removal"),
    ("145", "spas_beauty_services"),
    ("146", "hair_care"),
    ("147", "cosmetology_beauty_professionals"),
    ("148", "off_road_vehicles"),
    ("154", "kids_teens"),
    ("157", "human_resources"),
    ("158", "home_improvement"),
    ("166", "public_safety"),
    ("168", "emergency_services"),
    ("170", "vehicle_licensing_registration"),
];
