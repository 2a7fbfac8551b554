//! Static page copy. Hebrew, rendered right-to-left.

use crate::components::icon::Icon;
use crate::config;

pub struct Service {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct ContactChannel {
    pub icon: Icon,
    pub label: &'static str,
    pub value: &'static str,
    /// Phone-style values are shown left-to-right.
    pub ltr: bool,
}

pub const HERO_BADGE: &str = "אר.אס.טי - המומחים לבריכות שחייה";
pub const HERO_TITLE: &str = "שירות לבריכות שחיה, תכנון והקמה";
pub const HERO_LEAD: &str = "הפתרון המלא לבריכה שלכם: מתכנון הנדסי מוקפד, דרך מערכות יוניזציה ירוקות, ועד לשירות טכני ע\"י מומחים מוסמכים.";

pub const STATS: [Stat; 3] = [
    Stat { value: "100%", label: "ללא ריח כלור" },
    Stat { value: "20+", label: "שנות ניסיון" },
    Stat { value: "ISO", label: "תקני משרד הבריאות" },
];

pub const SERVICES_TITLE: &str = "פתרונות מקיפים תחת קורת גג אחת";
pub const SERVICES_SUBTITLE: &str = "אנחנו לא רק מוכרים ציוד, אנחנו מספקים פתרונות הנדסיים מקיפים לתחזוקה, תפעול ובטיחות הבריכה שלכם.";

pub const SERVICES: [Service; 6] = [
    Service {
        icon: Icon::Ruler,
        title: "תכנון והקמה",
        description: "תכנון בריכות ציבוריות ופרטיות בהתאם לדרישות משרד הבריאות והתקנים הישראלים. ליווי משלב הקונספט ועד השחייה הראשונה.",
        features: &["תכנון הנדסי וקונסטרוקציה", "עבודות בטון וצנרת", "פיקוח על הביצוע"],
    },
    Service {
        icon: Icon::Bolt,
        title: "חיטוי ירוק (יוניזציה)",
        description: "מערכות חיטוי מתקדמות בטכנולוגיית יוניזציה (נחושת וכסף). מים צלולים ללא שימוש אגרסיבי בכלור, מלח או כימיקלים.",
        features: &["ללא צריבה בעיניים", "מים באיכות שתייה", "חיסכון בעלויות תפעול"],
    },
    Service {
        icon: Icon::Gauge,
        title: "מערכות בקרה ואוטומציה",
        description: "פתרונות חכמים לניטור ואיזון הבריכה: בקרי כימיקלים, מדי עכירות, בקרי גובה מפלס ובקרת ספיקה.",
        features: &["אוגרי נתונים מובנים", "חיישנים מתקדמים", "התראות בזמן אמת"],
    },
    Service {
        icon: Icon::ThermometerSun,
        title: "חימום ואנרגיה",
        description: "פתרונות חימום מתקדמים להארכת עונת הרחצה: משאבות חום, חימום סולארי וכיסויים תרמיים צפים לשמירת החום.",
        features: &["משאבות חום חסכוניות", "כיסויים צפים", "חיסכון בחשמל"],
    },
    Service {
        icon: Icon::Robot,
        title: "ציוד ורובוטים",
        description: "יבוא ושיווק של הציוד המתקדם בעולם: רובוטים לניקוי, משאבות סחרור, מסננים, ותאורת לד תת-מימית מעוצבת.",
        features: &["רובוטים לניקוי קרקעית", "תאורת LED צבעונית", "משאבות מינון SEKO/Etatron"],
    },
    Service {
        icon: Icon::ShieldCheck,
        title: "שירות ובדיקות תקינות",
        description: "שירות טכני מקצועי ובדיקות בטיחות תקופתיות. מתן אישור תקינות מערכות חתום ע\"י טכנאי חשמלאי מוסמך.",
        features: &["אישור חשמלאי מוסמך", "בדיקת הארקות ובטיחות", "שירות טכני 24/7"],
    },
];

pub const TECH_BADGE: &str = "יוניזציית נחושת וכסף";
pub const TECH_HEADLINE: &str = "מים צלולים ובריאים";
pub const TECH_HEADLINE_ACCENT: &str = "ללא כימיקלים ורעלים.";
pub const TECH_BODY: &str = "טכנולוגיית יוניזציה (Ionization) משתמשת ביוני נחושת וכסף כדי לנטרל בקטריות, אצות וחיידקים (כולל לגיונלה) ביעילות של 100%. המערכת הופכת את המים לרכים, נעימים ובטוחים, ללא הריח והצריבה המוכרים של הכלור.";
pub const TECH_FEATURES: [&str; 4] = [
    "יעילות של 100% בחיסול חיידקים",
    "מתאים גם למי שתייה (לפי התקן)",
    "מערכת יציבה שאינה מושפעת מחום",
    "הגנה אקטיבית בפני קורוזיה בצנרת",
];
pub const TECH_CAPTION_KICKER: &str = "טכנולוגיית העתיד";
pub const TECH_CAPTION: &str = "פתרון מושלם מ-3 ועד 3000 קוב מים";

pub const ABOUT_KICKER: &str = "אודות החברה";
pub const ABOUT_TITLE: &str = "אר.אס.טי - מומחים בבנייה ואספקת ציוד";
pub const ABOUT_INTRO_PREFIX: &str = "החברה נוסדה על ידי ";
pub const ABOUT_FOUNDER: &str = "רומן טשימוב";
pub const ABOUT_INTRO_SUFFIX: &str = ", מומחה בעל וותק של למעלה מ-20 שנה. אר.אס.טי מתמחה בתכנון וביצוע עבודות בנייה, אספקת כימיקלים ושרות בריכות בע\"מ.";
pub const ABOUT_BODY: &str = "אנו מתמחים במתן פתרונות כוללים למגזר הפרטי והציבורי: החל משלב התכנון ההנדסי, דרך הקמת המערכות ועד לאספקת כימיקלים ושירות שוטף. בין לקוחותינו: רשתות בתי מלון, קיבוצים, מתנ\"סים ומרכזי ספורט.";
pub const ABOUT_CHIPS: [(Icon, &str); 2] = [(Icon::UserCheck, "צוות מיומן"), (Icon::Settings, "יבואני ציוד")];

pub const CONTACT_TITLE: &str = "צור קשר";
pub const CONTACT_LEAD: &str = "זקוקים לייעוץ? יש לכם תקלה? מעוניינים בהצעת מחיר למערכת יוניזציה? השאירו פרטים ונחזור אליכם בהקדם.";

pub const CONTACT_CHANNELS: [ContactChannel; 4] = [
    ContactChannel { icon: Icon::Phone, label: "טלפון משרד", value: config::PHONE, ltr: true },
    ContactChannel { icon: Icon::Printer, label: "פקס", value: config::FAX, ltr: true },
    ContactChannel { icon: Icon::Mail, label: "דואר אלקטרוני", value: config::EMAIL, ltr: false },
    ContactChannel { icon: Icon::MapPin, label: "כתובת", value: config::ADDRESS, ltr: false },
];

pub const CONTACT_TOPICS: [&str; 5] = [
    "ייעוץ לתכנון והקמה",
    "הזמנת שירות טכני / בדיקה",
    "מתעניין במערכת חיטוי ירוקה",
    "רכישת ציוד / כימיקלים",
    "אחר",
];

pub const FOOTER_BLURB: &str = "פתרונות מתקדמים בבריכות שחייה. יבואנים בלעדיים של מערכות בקרה ומכשור מתקדם. שירות מקצועי ואמין למגזר הפרטי והציבורי.";

/// Primary remote image followed by its stock replacement.
pub const HERO_IMAGES: [&str; 2] = [
    "https://www.rstisrael.com/wp-content/uploads/home.jpg",
    "https://images.unsplash.com/photo-1576013551627-0cc20b468808?q=80&w=2074&auto=format&fit=crop",
];
pub const TECH_IMAGES: [&str; 2] = [
    "https://www.rstisrael.com/wp-content/uploads/NEC-20.png",
    "https://images.unsplash.com/photo-1563299796-b729d0af54a5?q=80&w=1925&auto=format&fit=crop",
];
pub const ABOUT_IMAGES: [&str; 2] = [
    "https://www.rstisrael.com/wp-content/uploads/IMG_2198.jpg",
    "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?q=80&w=1932&auto=format&fit=crop",
];
