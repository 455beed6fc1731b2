use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tables::{BRANCHES, STEMS};

/// Heavenly stem (天干).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Stem {
    #[serde(rename = "甲")]
    Jia,
    #[serde(rename = "乙")]
    Yi,
    #[serde(rename = "丙")]
    Bing,
    #[serde(rename = "丁")]
    Ding,
    #[serde(rename = "戊")]
    Wu,
    #[serde(rename = "己")]
    Ji,
    #[serde(rename = "庚")]
    Geng,
    #[serde(rename = "辛")]
    Xin,
    #[serde(rename = "壬")]
    Ren,
    #[serde(rename = "癸")]
    Gui,
}

impl Stem {
    pub const ALL: [Stem; 10] = [
        Stem::Jia,
        Stem::Yi,
        Stem::Bing,
        Stem::Ding,
        Stem::Wu,
        Stem::Ji,
        Stem::Geng,
        Stem::Xin,
        Stem::Ren,
        Stem::Gui,
    ];

    /// Stem at `index mod 10`.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(10) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        STEMS[self.index()]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        STEMS
            .iter()
            .position(|s| *s == label)
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Earthly branch (地支).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Branch {
    #[serde(rename = "子")]
    Zi,
    #[serde(rename = "丑")]
    Chou,
    #[serde(rename = "寅")]
    Yin,
    #[serde(rename = "卯")]
    Mao,
    #[serde(rename = "辰")]
    Chen,
    #[serde(rename = "巳")]
    Si,
    #[serde(rename = "午")]
    Wu,
    #[serde(rename = "未")]
    Wei,
    #[serde(rename = "申")]
    Shen,
    #[serde(rename = "酉")]
    You,
    #[serde(rename = "戌")]
    Xu,
    #[serde(rename = "亥")]
    Hai,
}

impl Branch {
    pub const ALL: [Branch; 12] = [
        Branch::Zi,
        Branch::Chou,
        Branch::Yin,
        Branch::Mao,
        Branch::Chen,
        Branch::Si,
        Branch::Wu,
        Branch::Wei,
        Branch::Shen,
        Branch::You,
        Branch::Xu,
        Branch::Hai,
    ];

    /// Branch at `index mod 12`.
    pub fn from_index(index: i64) -> Self {
        Self::ALL[index.rem_euclid(12) as usize]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        BRANCHES[self.index()]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        BRANCHES
            .iter()
            .position(|b| *b == label)
            .map(|i| Self::ALL[i])
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One stem+branch pair assigned to a year, month, day or hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    #[serde(rename = "gan")]
    pub stem: Stem,
    #[serde(rename = "zhi")]
    pub branch: Branch,
}

impl Pillar {
    pub fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at position `offset` of the sexagenary cycle. Any integer is
    /// accepted; the result has period 60.
    pub fn from_cycle(offset: i64) -> Self {
        Self {
            stem: Stem::from_index(offset),
            branch: Branch::from_index(offset),
        }
    }

    /// Position of this pair in the 60-cycle (甲子 = 0).
    ///
    /// Returns `None` for pairs whose stem and branch differ in parity; those
    /// never occur in the cycle.
    pub fn cycle_index(self) -> Option<usize> {
        let (s, b) = (self.stem.index(), self.branch.index());
        (0..60).find(|i| i % 10 == s && i % 12 == b)
    }

    /// Parse a two-character label such as `"甲子"`.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let stem = chars.next()?;
        let branch = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        Some(Self {
            stem: Stem::from_label(stem.encode_utf8(&mut [0; 4]))?,
            branch: Branch::from_label(branch.encode_utf8(&mut [0; 4]))?,
        })
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}
