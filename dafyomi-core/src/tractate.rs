//! Tractate tables for every supported cycle.
//!
//! Page counts and ordering are fixed historical data. Changing any of them
//! moves every assignment after the change, so treat edits as breaking.

/// One tractate and the pages it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TractateEntry {
    pub name: &'static str,
    /// Last page number of the tractate before any correction.
    pub page_count: u32,
    /// Added to every computed page. Used where the printed pagination
    /// continues from the previous tractate in the same volume.
    pub page_correction: u32,
}

const fn entry(name: &'static str, page_count: u32) -> TractateEntry {
    TractateEntry {
        name,
        page_count,
        page_correction: 0,
    }
}

const fn corrected(name: &'static str, page_count: u32, page_correction: u32) -> TractateEntry {
    TractateEntry {
        name,
        page_count,
        page_correction,
    }
}

const BAVLI: [TractateEntry; 40] = [
    entry("Berachot", 64),
    entry("Shabbat", 157),
    entry("Eruvin", 105),
    entry("Pesachim", 121),
    entry("Shekalim", 22),
    entry("Yoma", 88),
    entry("Sukkah", 56),
    entry("Beitzah", 40),
    entry("Rosh Hashana", 35),
    entry("Taanit", 31),
    entry("Megillah", 32),
    entry("Moed Katan", 29),
    entry("Chagigah", 27),
    entry("Yevamot", 122),
    entry("Ketubot", 112),
    entry("Nedarim", 91),
    entry("Nazir", 66),
    entry("Sotah", 49),
    entry("Gitin", 90),
    entry("Kiddushin", 82),
    entry("Baba Kamma", 119),
    entry("Baba Metzia", 119),
    entry("Baba Batra", 176),
    entry("Sanhedrin", 113),
    entry("Makkot", 24),
    entry("Shevuot", 49),
    entry("Avodah Zarah", 76),
    entry("Horayot", 14),
    entry("Zevachim", 120),
    entry("Menachot", 110),
    entry("Chullin", 142),
    entry("Bechorot", 61),
    entry("Arachin", 34),
    entry("Temurah", 34),
    entry("Keritot", 28),
    entry("Meilah", 22),
    corrected("Kinnim", 4, 21),
    corrected("Tamid", 9, 24),
    corrected("Midot", 5, 32),
    entry("Niddah", 73),
];

/// Shekalim page count used by Daf Yomi cycles 1 through 7.
const OLD_CYCLE_SHEKALIM_PAGES: u32 = 13;

const YERUSHALMI_VILNA: [TractateEntry; 39] = [
    entry("Berakhot", 68),
    entry("Peah", 37),
    entry("Demai", 34),
    entry("Kilayim", 44),
    entry("Sheviit", 31),
    entry("Terumot", 59),
    entry("Maasrot", 26),
    entry("Maaser Sheni", 33),
    entry("Challah", 28),
    entry("Orlah", 20),
    entry("Bikkurim", 13),
    entry("Shabbat", 92),
    entry("Eruvin", 65),
    entry("Pesachim", 71),
    entry("Beitzah", 22),
    entry("Rosh Hashanah", 22),
    entry("Yoma", 42),
    entry("Sukkah", 26),
    entry("Taanit", 26),
    entry("Shekalim", 33),
    entry("Megillah", 34),
    entry("Chagigah", 22),
    entry("Moed Katan", 19),
    entry("Yevamot", 85),
    entry("Ketubot", 72),
    entry("Sotah", 47),
    entry("Nedarim", 40),
    entry("Nazir", 47),
    entry("Gittin", 54),
    entry("Kiddushin", 48),
    entry("Bava Kamma", 44),
    entry("Bava Metzia", 37),
    entry("Bava Batra", 34),
    entry("Shevuot", 44),
    entry("Makkot", 9),
    entry("Sanhedrin", 57),
    entry("Avodah Zarah", 37),
    entry("Horayot", 19),
    entry("Niddah", 13),
];

const YERUSHALMI_SCHOTTENSTEIN: [TractateEntry; 39] = [
    entry("Berakhot", 94),
    entry("Peah", 73),
    entry("Demai", 77),
    entry("Kilayim", 84),
    entry("Sheviit", 87),
    entry("Terumot", 107),
    entry("Maasrot", 46),
    entry("Maaser Sheni", 59),
    entry("Challah", 49),
    entry("Orlah", 42),
    entry("Bikkurim", 26),
    entry("Shabbat", 113),
    entry("Eruvin", 71),
    entry("Pesachim", 86),
    entry("Shekalim", 61),
    entry("Yoma", 57),
    entry("Sukkah", 33),
    entry("Beitzah", 49),
    entry("Rosh Hashanah", 27),
    entry("Taanit", 31),
    entry("Megillah", 41),
    entry("Chagigah", 28),
    entry("Moed Katan", 23),
    entry("Yevamot", 88),
    entry("Ketubot", 77),
    entry("Nedarim", 42),
    entry("Nazir", 53),
    entry("Sotah", 52),
    entry("Gittin", 53),
    entry("Kiddushin", 53),
    entry("Bava Kamma", 40),
    entry("Bava Metzia", 35),
    entry("Bava Batra", 39),
    entry("Sanhedrin", 75),
    entry("Shevuot", 49),
    entry("Avodah Zarah", 34),
    entry("Makkot", 11),
    entry("Horayot", 18),
    entry("Niddah", 11),
];

/// An ordered, immutable list of tractates making up one cycle.
///
/// `first_page` is the page each tractate opens on: Bavli tractates start on
/// daf 2, Yerushalmi tractates on daf 1. A tractate therefore occupies
/// `page_count - first_page + 1` consecutive study days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TractateTable {
    entries: Vec<TractateEntry>,
    first_page: u32,
}

impl TractateTable {
    /// Babylonian Talmud as studied from cycle 8 onward.
    pub fn bavli() -> Self {
        TractateTable {
            entries: BAVLI.to_vec(),
            first_page: 2,
        }
    }

    /// Babylonian Talmud as studied in cycles 1 through 7.
    pub fn bavli_old_cycle() -> Self {
        Self::bavli().with_page_count("Shekalim", OLD_CYCLE_SHEKALIM_PAGES)
    }

    pub fn yerushalmi_vilna() -> Self {
        TractateTable {
            entries: YERUSHALMI_VILNA.to_vec(),
            first_page: 1,
        }
    }

    pub fn yerushalmi_schottenstein() -> Self {
        TractateTable {
            entries: YERUSHALMI_SCHOTTENSTEIN.to_vec(),
            first_page: 1,
        }
    }

    /// Copy of this table with one tractate's page count replaced.
    pub fn with_page_count(mut self, name: &str, page_count: u32) -> Self {
        for e in self.entries.iter_mut().filter(|e| e.name == name) {
            e.page_count = page_count;
        }
        self
    }

    pub fn entries(&self) -> &[TractateEntry] {
        &self.entries
    }

    pub fn first_page(&self) -> u32 {
        self.first_page
    }

    /// Study days a single tractate occupies.
    pub fn days_in(&self, entry: &TractateEntry) -> i64 {
        i64::from(entry.page_count) - i64::from(self.first_page) + 1
    }

    /// Study days in one full pass through the table.
    pub fn total_days(&self) -> i64 {
        self.entries.iter().map(|e| self.days_in(e)).sum()
    }
}
