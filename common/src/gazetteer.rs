//! Gazetteer: the static reference table of known places
//!
//! Each entry carries a canonical name, loose alternate names, district,
//! category, altitude and topical keywords. The table is built once
//! (builtin dataset or a JSON file), validated at construction, and read
//! concurrently afterwards; there is no runtime mutation.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Place category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Temple,
    HillStation,
    Religious,
    Wildlife,
    Nature,
    Adventure,
    City,
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temple" => Ok(Category::Temple),
            "hill_station" | "hill station" => Ok(Category::HillStation),
            "religious" => Ok(Category::Religious),
            "wildlife" => Ok(Category::Wildlife),
            "nature" => Ok(Category::Nature),
            "adventure" => Ok(Category::Adventure),
            "city" => Ok(Category::City),
            _ => Err(format!(
                "Unknown category: {}. Use temple, hill_station, religious, wildlife, nature, adventure, or city",
                s
            )),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Temple => write!(f, "temple"),
            Category::HillStation => write!(f, "hill_station"),
            Category::Religious => write!(f, "religious"),
            Category::Wildlife => write!(f, "wildlife"),
            Category::Nature => write!(f, "nature"),
            Category::Adventure => write!(f, "adventure"),
            Category::City => write!(f, "city"),
        }
    }
}

/// One reference place record, immutable after gazetteer construction
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GazetteerEntry {
    pub canonical_name: String,
    pub aliases: Vec<String>,
    pub district: String,
    pub category: Category,
    pub altitude_m: Option<u32>,
    /// Lowercase topical keywords used for match corroboration
    pub keywords: Vec<String>,
}

impl Default for GazetteerEntry {
    fn default() -> Self {
        Self {
            canonical_name: String::new(),
            aliases: Vec::new(),
            district: String::new(),
            category: Category::City,
            altitude_m: None,
            keywords: Vec::new(),
        }
    }
}

/// The reference table. Iteration order over entries is the insertion
/// order of the source dataset: stable and deterministic, but carrying
/// no semantic priority.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
    /// lowercase canonical name -> position in `entries`
    index: HashMap<String, usize>,
}

impl Gazetteer {
    /// Build a gazetteer, rejecting duplicate canonical names
    /// (case-insensitive). Duplicates are a dataset defect and must
    /// fail here, never be papered over at lookup time.
    pub fn new(entries: Vec<GazetteerEntry>) -> Result<Self> {
        let mut index = HashMap::with_capacity(entries.len());

        for (i, entry) in entries.iter().enumerate() {
            let key = entry.canonical_name.trim().to_lowercase();
            if key.is_empty() {
                return Err(Error::Gazetteer(format!(
                    "entry {} has an empty canonical name",
                    i
                )));
            }
            if index.insert(key, i).is_some() {
                return Err(Error::Gazetteer(format!(
                    "duplicate canonical name: {}",
                    entry.canonical_name.trim().to_lowercase()
                )));
            }
        }

        Ok(Self { entries, index })
    }

    /// Load a gazetteer from a JSON array of entries
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<GazetteerEntry> = serde_json::from_str(json)?;
        Self::new(entries)
    }

    /// Load a gazetteer from a JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Case-insensitive, whitespace-trimmed exact match on the
    /// canonical name
    pub fn lookup_exact(&self, name: &str) -> Option<&GazetteerEntry> {
        let key = name.trim().to_lowercase();
        self.index.get(&key).map(|&i| &self.entries[i])
    }

    /// First entry where the query is a substring of an alias or an
    /// alias is a substring of the query (both lowercased).
    ///
    /// The bidirectional containment is deliberate: model output tends
    /// to append or drop suffixes like "Temple" or "Dham". Short
    /// aliases in a custom dataset widen the false-positive surface.
    pub fn lookup_alias(&self, name: &str) -> Option<&GazetteerEntry> {
        let query = name.trim().to_lowercase();
        if query.is_empty() {
            return None;
        }

        self.entries.iter().find(|entry| {
            entry.aliases.iter().any(|alias| {
                let alias = alias.to_lowercase();
                !alias.is_empty() && (query.contains(&alias) || alias.contains(&query))
            })
        })
    }

    /// All entries, in dataset order
    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All places with the given category tag
    pub fn entries_by_category(&self, category: Category) -> Vec<&GazetteerEntry> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// All places whose district contains the given text
    /// (case-insensitive)
    pub fn entries_by_district(&self, district: &str) -> Vec<&GazetteerEntry> {
        let district = district.trim().to_lowercase();
        if district.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| e.district.to_lowercase().contains(&district))
            .collect()
    }

    /// Autocomplete-style suggestions: up to `limit` entries whose
    /// canonical name or an alias contains the partial text
    pub fn suggestions(&self, partial: &str, limit: usize) -> Vec<&GazetteerEntry> {
        let partial = partial.trim().to_lowercase();
        if partial.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| {
                entry.canonical_name.to_lowercase().contains(&partial)
                    || entry
                        .aliases
                        .iter()
                        .any(|a| a.to_lowercase().contains(&partial))
            })
            .take(limit)
            .collect()
    }

    /// Builtin Uttarakhand dataset: Char Dham, hill stations, religious
    /// towns, wildlife parks and adventure spots.
    pub fn uttarakhand() -> Self {
        let entries = vec![
            // Char Dham
            place(
                "Kedarnath",
                &["kedar", "kedarnath temple", "kedar dham"],
                "Rudraprayag",
                Category::Temple,
                Some(3583),
                &["shiva", "temple", "snow", "mountain", "mandakini"],
            ),
            place(
                "Badrinath",
                &["badri", "badrinath temple", "badri dham"],
                "Chamoli",
                Category::Temple,
                Some(3300),
                &["vishnu", "temple", "alaknanda", "neelkanth peak"],
            ),
            place(
                "Gangotri",
                &["gangotri temple", "gangotri dham"],
                "Uttarkashi",
                Category::Temple,
                Some(3100),
                &["ganga", "bhagirathi", "temple", "glacier"],
            ),
            place(
                "Yamunotri",
                &["yamunotri temple", "yamunotri dham"],
                "Uttarkashi",
                Category::Temple,
                Some(3293),
                &["yamuna", "temple", "hot spring", "divya shila"],
            ),
            // Hill stations
            place(
                "Nainital",
                &["naini lake"],
                "Nainital",
                Category::HillStation,
                Some(2084),
                &["lake", "naini", "mall road", "boats", "naina devi"],
            ),
            place(
                "Mussoorie",
                &["queen of hills"],
                "Dehradun",
                Category::HillStation,
                Some(2005),
                &["mall road", "kempty falls", "gun hill", "cable car"],
            ),
            place(
                "Ranikhet",
                &["rani khet"],
                "Almora",
                Category::HillStation,
                Some(1869),
                &["golf course", "jhula devi", "chaubatia"],
            ),
            place(
                "Almora",
                &[],
                "Almora",
                Category::HillStation,
                Some(1638),
                &["kasar devi", "bright end corner", "nanda devi"],
            ),
            place(
                "Kausani",
                &["switzerland of india"],
                "Bageshwar",
                Category::HillStation,
                Some(1890),
                &["tea gardens", "himalayan view", "anasakti ashram"],
            ),
            // Religious towns and temples
            place(
                "Haridwar",
                &["hari dwar", "gateway to gods"],
                "Haridwar",
                Category::Religious,
                Some(314),
                &["ganga", "har ki pauri", "aarti", "mansa devi", "chandi devi"],
            ),
            place(
                "Rishikesh",
                &["yoga capital"],
                "Dehradun",
                Category::Religious,
                Some(372),
                &["ganga", "laxman jhula", "ram jhula", "rafting", "yoga", "beatles ashram"],
            ),
            place(
                "Tungnath",
                &["tungnath temple"],
                "Rudraprayag",
                Category::Temple,
                Some(3680),
                &["highest shiva temple", "chandrashila", "trek", "panch kedar"],
            ),
            place(
                "Jageshwar",
                &["jageshwar dham"],
                "Almora",
                Category::Temple,
                Some(1870),
                &["ancient temples", "shiva", "stone temples", "125 temples"],
            ),
            // Wildlife and nature
            place(
                "Jim Corbett National Park",
                &["corbett", "corbett national park"],
                "Nainital",
                Category::Wildlife,
                Some(400),
                &["tiger", "wildlife", "safari", "ramganga", "dhikala"],
            ),
            place(
                "Valley of Flowers",
                &["flower valley"],
                "Chamoli",
                Category::Nature,
                Some(3658),
                &["flowers", "meadow", "trek", "unesco", "hemkund"],
            ),
            // Adventure and trekking
            place(
                "Auli",
                &["auli ski resort"],
                "Chamoli",
                Category::Adventure,
                Some(2800),
                &["skiing", "cable car", "snow", "nanda devi view"],
            ),
            place(
                "Chopta",
                &["mini switzerland"],
                "Rudraprayag",
                Category::Nature,
                Some(2680),
                &["tungnath trek", "chandrashila", "meadows", "deoria tal"],
            ),
            // Cities and cantonments
            place(
                "Dehradun",
                &["doon valley"],
                "Dehradun",
                Category::City,
                Some(640),
                &["capital", "robbers cave", "sahastradhara", "fma", "ima"],
            ),
            place(
                "Lansdowne",
                &[],
                "Pauri Garhwal",
                Category::HillStation,
                Some(1706),
                &["cantonment", "bhulla lake", "tip n top"],
            ),
        ];

        Self::new(entries).expect("builtin dataset has unique canonical names")
    }
}

fn place(
    name: &str,
    aliases: &[&str],
    district: &str,
    category: Category,
    altitude_m: Option<u32>,
    keywords: &[&str],
) -> GazetteerEntry {
    GazetteerEntry {
        canonical_name: name.to_string(),
        aliases: aliases.iter().map(|s| s.to_string()).collect(),
        district: district.to_string(),
        category,
        altitude_m,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
    }
}
