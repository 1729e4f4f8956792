use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExampleEntry {
    pub name: String,
    #[serde(default)]
    pub english_name: Option<String>,
    pub culture: String,
    pub wikipedia: String,
    pub note: String,
}

impl ExampleEntry {
    fn new(
        name: &str,
        english_name: Option<&str>,
        culture: &str,
        wikipedia: &str,
        note: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            english_name: english_name.map(str::to_string),
            culture: culture.to_string(),
            wikipedia: wikipedia.to_string(),
            note: note.to_string(),
        }
    }

    /// Exact match against the native or transliterated form.
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.english_name.as_deref() == Some(name)
    }

    pub fn display_name(&self) -> String {
        match &self.english_name {
            Some(english) => format!("{} ({})", self.name, english),
            None => self.name.clone(),
        }
    }
}

/// Read-only table of example names. Built once and handed to the app, so
/// tests and `catalogue.json` can swap in their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CatalogueFile")]
pub struct Catalogue {
    entries: Vec<ExampleEntry>,
    featured: Vec<usize>,
}

#[derive(Deserialize)]
struct CatalogueFile {
    entries: Vec<ExampleEntry>,
    #[serde(default)]
    featured: Vec<usize>,
}

impl From<CatalogueFile> for Catalogue {
    fn from(file: CatalogueFile) -> Self {
        Catalogue::new(file.entries, file.featured)
    }
}

impl Catalogue {
    /// Featured indices outside the table are dropped.
    pub fn new(entries: Vec<ExampleEntry>, featured: Vec<usize>) -> Self {
        let featured = featured.into_iter().filter(|&i| i < entries.len()).collect();
        Self { entries, featured }
    }

    pub fn empty() -> Self {
        Self { entries: Vec::new(), featured: Vec::new() }
    }

    pub fn entries(&self) -> &[ExampleEntry] {
        &self.entries
    }

    pub fn featured(&self) -> impl Iterator<Item = &ExampleEntry> + '_ {
        self.featured.iter().filter_map(|&i| self.entries.get(i))
    }

    pub fn featured_indices(&self) -> &[usize] {
        &self.featured
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&ExampleEntry> {
        self.entries.iter().find(|entry| entry.matches(name))
    }

    pub fn builtin() -> Self {
        let entries = vec![
            ExampleEntry::new(
                "北岛",
                Some("Bei Dao"),
                "Chinese",
                "https://en.wikipedia.org/wiki/Bei_Dao",
                "Pen name of Zhao Zhenkai, meaning \"north island\". Said as BAY-dow; both syllables are third tone.",
            ),
            ExampleEntry::new(
                "李白",
                Some("Li Bai"),
                "Chinese",
                "https://en.wikipedia.org/wiki/Li_Bai",
                "Tang dynasty poet. Family name Li comes first; Bai rhymes with \"buy\".",
            ),
            ExampleEntry::new(
                "杜甫",
                Some("Du Fu"),
                "Chinese",
                "https://en.wikipedia.org/wiki/Du_Fu",
                "Tang dynasty poet. Du is a falling tone, Fu a dipping tone: DOO-foo.",
            ),
            ExampleEntry::new(
                "松尾芭蕉",
                Some("Matsuo Bashō"),
                "Japanese",
                "https://en.wikipedia.org/wiki/Matsuo_Bash%C5%8D",
                "Family name Matsuo first. The macron in Bashō marks a long \"o\": BAH-shoh.",
            ),
            ExampleEntry::new(
                "윤동주",
                Some("Yun Dong-ju"),
                "Korean",
                "https://en.wikipedia.org/wiki/Yun_Dong-ju",
                "One-syllable family name Yun, then the given name Dong-ju: yoon dong-joo.",
            ),
            ExampleEntry::new(
                "Nguyễn Du",
                None,
                "Vietnamese",
                "https://en.wikipedia.org/wiki/Nguy%E1%BB%85n_Du",
                "Author of The Tale of Kiều. Nguyễn is close to a single syllable, \"ngwin\", with a broken rising tone.",
            ),
            ExampleEntry::new(
                "রবীন্দ্রনাথ ঠাকুর",
                Some("Rabindranath Tagore"),
                "Bengali",
                "https://en.wikipedia.org/wiki/Rabindranath_Tagore",
                "Given name first. In Bengali the family name is Thakur; Tagore is the anglicised form.",
            ),
            ExampleEntry::new(
                "محمود درويش",
                Some("Mahmoud Darwish"),
                "Palestinian",
                "https://en.wikipedia.org/wiki/Mahmoud_Darwish",
                "Stress the second syllable of each name: mah-MOOD dar-WEESH.",
            ),
            ExampleEntry::new(
                "Анна Ахматова",
                Some("Anna Akhmatova"),
                "Russian",
                "https://en.wikipedia.org/wiki/Anna_Akhmatova",
                "Stress falls on the second syllable of the surname: akh-MAH-to-va.",
            ),
            ExampleEntry::new(
                "Wisława Szymborska",
                None,
                "Polish",
                "https://en.wikipedia.org/wiki/Wis%C5%82awa_Szymborska",
                "The Polish ł sounds like English \"w\": vee-SWAH-va shim-BOR-ska.",
            ),
            ExampleEntry::new(
                "Federico García Lorca",
                None,
                "Spanish",
                "https://en.wikipedia.org/wiki/Federico_Garc%C3%ADa_Lorca",
                "García is the paternal surname and Lorca the maternal one. Stress gar-SEE-a.",
            ),
            ExampleEntry::new(
                "Oodgeroo Noonuccal",
                None,
                "Aboriginal Australian",
                "https://en.wikipedia.org/wiki/Oodgeroo_Noonuccal",
                "Quandamooka poet from Minjerribah. Oodgeroo means paperbark tree; Noonuccal is her people.",
            ),
            ExampleEntry::new(
                "Γιώργος Σεφέρης",
                Some("Giorgos Seferis"),
                "Greek",
                "https://en.wikipedia.org/wiki/Giorgos_Seferis",
                "Pen name of Giorgos Seferiadis. YOR-gos se-FEH-ris.",
            ),
            ExampleEntry::new(
                "ไพวรินทร์ ขาวงาม",
                Some("Paiwarin Khao-Ngam"),
                "Thai",
                "https://en.wikipedia.org/wiki/Paiwarin_Khao-Ngam",
                "Given name first. The \"ng\" at the start of Ngam is the sound at the end of \"sing\".",
            ),
        ];

        Self::new(entries, vec![0, 3, 5, 9, 11])
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}
