/// Chord quality classification by semitone distances above the chord root

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    Augmented,
    Other,
}

impl TriadQuality {
    pub fn classify(third: u8, fifth: u8) -> Self {
        match (third, fifth) {
            (4, 7) => TriadQuality::Major,
            (3, 7) => TriadQuality::Minor,
            (3, 6) => TriadQuality::Diminished,
            (4, 8) => TriadQuality::Augmented,
            _ => TriadQuality::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TriadQuality::Major => "maj",
            TriadQuality::Minor => "min",
            TriadQuality::Diminished => "dim",
            TriadQuality::Augmented => "aug",
            TriadQuality::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeventhQuality {
    Dominant7,
    Major7,
    Minor7,
    HalfDiminished7,
    Diminished7,
    Other,
}

impl SeventhQuality {
    pub fn classify(third: u8, fifth: u8, seventh: u8) -> Self {
        match (third, fifth, seventh) {
            (4, 7, 10) => SeventhQuality::Dominant7,
            (4, 7, 11) => SeventhQuality::Major7,
            (3, 7, 10) => SeventhQuality::Minor7,
            (3, 6, 10) => SeventhQuality::HalfDiminished7,
            (3, 6, 9) => SeventhQuality::Diminished7,
            _ => SeventhQuality::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeventhQuality::Dominant7 => "7",
            SeventhQuality::Major7 => "maj7",
            SeventhQuality::Minor7 => "min7",
            SeventhQuality::HalfDiminished7 => "m7b5",
            SeventhQuality::Diminished7 => "dim7",
            SeventhQuality::Other => "other7",
        }
    }
}

/// Upper-case Roman numeral for a 1-based scale degree; plain digits past VII
pub fn roman_numeral(degree: usize) -> String {
    const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];
    degree
        .checked_sub(1)
        .and_then(|index| NUMERALS.get(index))
        .map(|numeral| numeral.to_string())
        .unwrap_or_else(|| degree.to_string())
}
