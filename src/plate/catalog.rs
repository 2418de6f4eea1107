//! Region catalog
//!
//! The ordered list of place names that can appear on a plate. Lookup is
//! substring containment in listed order, so earlier entries win when OCR
//! noise makes several names plausible. The default list can be replaced
//! wholesale from a file without touching the parser.

use std::io::{self, BufRead};
use std::path::Path;

/// Issuing-office place names, in lookup priority order.
const DEFAULT_REGIONS: &[&str] = &[
    // Tokyo
    "品川", "練馬", "足立", "杉並", "世田谷", "江東", "葛飾", "江戸川", "板橋",
    "台東", "墨田", "荒川", "北", "豊島", "中野", "目黒", "大田", "港",
    "千代田", "中央", "文京", "新宿", "渋谷",
    // Kanto
    "横浜", "川崎", "相模", "湘南", "千葉", "習志野", "袖ケ浦", "野田",
    "水戸", "土浦", "つくば", "宇都宮", "とちぎ", "那須", "前橋", "高崎",
    // Kansai
    "大阪", "なにわ", "和泉", "堺", "神戸", "姫路", "京都", "奈良", "滋賀",
    // Chubu
    "名古屋", "尾張小牧", "一宮", "春日井", "豊田", "岡崎", "豊橋", "静岡", "浜松",
    "金沢", "富山", "福井", "長野", "松本", "諏訪", "山梨", "甲府",
    // Elsewhere
    "札幌", "函館", "旭川", "釧路", "帯広", "仙台", "宮城", "福島", "郡山", "いわき",
    "新潟", "長岡", "福岡", "北九州", "筑豊", "久留米", "佐賀", "長崎", "熊本",
    "大分", "宮崎", "鹿児島", "沖縄", "広島", "福山", "岡山", "倉敷", "山口",
    "下関", "鳥取", "島根", "松江", "徳島", "香川", "高知", "愛媛", "松山",
];

/// Ordered set of known place names
#[derive(Debug, Clone)]
pub struct RegionCatalog {
    names: Vec<String>,
}

impl RegionCatalog {
    /// Create a catalog from an explicit ordered list
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Load a catalog from a newline-separated file.
    /// Blank lines and `#` comments are skipped; order is preserved.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let file = std::fs::File::open(path)?;
        let names = io::BufReader::new(file)
            .lines()
            .collect::<io::Result<Vec<_>>>()?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        Ok(Self { names })
    }

    /// First catalog entry contained anywhere in the text
    pub fn find_in(&self, text: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|name| text.contains(name.as_str()))
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for RegionCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_REGIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
