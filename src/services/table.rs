use crate::domain::errors::TableError;
use std::collections::{BTreeMap, HashMap};

/// Slugs sharing a school and year cohort.
struct Cohort {
    school: &'static str,
    class: u32,
    slugs: &'static [&'static str],
}

const FIRST_YEAR: u32 = 10;
const SECOND_YEAR: u32 = 11;
const THIRD_YEAR: u32 = 12;

const BUILTIN: &[Cohort] = &[
    Cohort {
        school: "karasuno",
        class: FIRST_YEAR,
        slugs: &[
            "hinata-shoyo",
            "kageyama-tobio",
            "tsukishima-kei",
            "yamaguchi-tadashi",
            "yachi-hitoka",
        ],
    },
    Cohort {
        school: "karasuno",
        class: SECOND_YEAR,
        slugs: &[
            "tanaka-ryunosuke",
            "nishinoya-yu",
            "ennoshita-chikara",
            "kinoshita-hisashi",
            "narita-kazuhito",
        ],
    },
    Cohort {
        school: "karasuno",
        class: THIRD_YEAR,
        slugs: &[
            "sawamura-daichi",
            "sugawara-koshi",
            "azumane-asahi",
            "shimizu-kiyoko",
        ],
    },
    Cohort {
        school: "nekoma",
        class: FIRST_YEAR,
        slugs: &["haiba-lev", "shibayama-yuki", "inuoka-so"],
    },
    Cohort {
        school: "nekoma",
        class: SECOND_YEAR,
        slugs: &["kozume-kenma", "yamamoto-taketora", "fukunaga-shohei"],
    },
    Cohort {
        school: "nekoma",
        class: THIRD_YEAR,
        slugs: &["kuroo-tetsuro", "yaku-morisuke", "kai-nobuyuki"],
    },
    Cohort {
        school: "aoba-johsai",
        class: FIRST_YEAR,
        slugs: &["kindaichi-yutaro", "kunimi-akira"],
    },
    Cohort {
        school: "aoba-johsai",
        class: SECOND_YEAR,
        slugs: &["yahaba-shigeru", "watari-shinji", "kyotani-kentaro"],
    },
    Cohort {
        school: "aoba-johsai",
        class: THIRD_YEAR,
        slugs: &[
            "oikawa-toru",
            "iwaizumi-hajime",
            "matsukawa-issei",
            "hanamaki-takahiro",
        ],
    },
    Cohort {
        school: "fukurodani",
        class: FIRST_YEAR,
        slugs: &["onaga-wataru"],
    },
    Cohort {
        school: "fukurodani",
        class: SECOND_YEAR,
        slugs: &["akaashi-keiji"],
    },
    Cohort {
        school: "fukurodani",
        class: THIRD_YEAR,
        slugs: &[
            "bokuto-kotaro",
            "konoha-akinori",
            "washio-tatsuki",
            "sarukui-yamato",
            "komi-haruki",
        ],
    },
    Cohort {
        school: "shiratorizawa",
        class: FIRST_YEAR,
        slugs: &["goshiki-tsutomu"],
    },
    Cohort {
        school: "shiratorizawa",
        class: SECOND_YEAR,
        slugs: &["shirabu-kenjiro", "kawanishi-taichi"],
    },
    Cohort {
        school: "shiratorizawa",
        class: THIRD_YEAR,
        slugs: &[
            "ushijima-wakatoshi",
            "tendo-satori",
            "semi-eita",
            "ohira-reon",
        ],
    },
    Cohort {
        school: "inarizaki",
        class: SECOND_YEAR,
        slugs: &["miya-atsumu", "miya-osamu", "suna-rintaro"],
    },
    Cohort {
        school: "inarizaki",
        class: THIRD_YEAR,
        slugs: &["kita-shinsuke", "ojiro-aran", "omimi-ren"],
    },
    Cohort {
        school: "date-tech",
        class: FIRST_YEAR,
        slugs: &["koganegawa-kanji"],
    },
    Cohort {
        school: "date-tech",
        class: SECOND_YEAR,
        slugs: &["aone-takanobu", "futakuchi-kenji"],
    },
];

/// Read-only base slug -> class mapping, built once per process.
#[derive(Debug, Clone, Default)]
pub struct ClassTable {
    entries: HashMap<String, u32>,
}

impl ClassTable {
    pub fn builtin() -> Result<Self, TableError> {
        let mut table = Self::default();
        for cohort in BUILTIN {
            for slug in cohort.slugs {
                table.insert(slug, cohort.class)?;
            }
            tracing::trace!(
                school = cohort.school,
                class = cohort.class,
                count = cohort.slugs.len(),
                "loaded cohort"
            );
        }
        Ok(table)
    }

    /// Adds one entry. Re-declaring a slug with the same class is a no-op;
    /// a different class is a conflict.
    pub fn insert(&mut self, slug: &str, class: u32) -> Result<(), TableError> {
        match self.entries.get(slug) {
            Some(&existing) if existing != class => Err(TableError::Conflict {
                slug: slug.to_string(),
                existing,
                incoming: class,
            }),
            Some(_) => Ok(()),
            None => {
                self.entries.insert(slug.to_string(), class);
                Ok(())
            }
        }
    }

    pub fn merge(&mut self, extra: &BTreeMap<String, u32>) -> Result<(), TableError> {
        for (slug, class) in extra {
            self.insert(slug, *class)?;
        }
        Ok(())
    }

    pub fn get(&self, slug: &str) -> Option<u32> {
        self.entries.get(slug).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
