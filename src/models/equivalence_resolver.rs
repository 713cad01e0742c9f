use crate::constants::{EQUIV_MISC, EQUIV_NUMBERS, EQUIV_SPELLING, NUMBER_CONVERSIONS};
use crate::types::{Word, WordRef};
use crate::Error;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// A named group of equivalence classes which can be toggled as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EquivalenceGroup {
    Numbers,
    Spelling,
    Misc,
}

impl FromStr for EquivalenceGroup {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "numbers" => Ok(EquivalenceGroup::Numbers),
            "spelling" => Ok(EquivalenceGroup::Spelling),
            "misc" => Ok(EquivalenceGroup::Misc),
            _ => Err(Error::ConfigError(format!(
                "Unknown equivalence group: {}",
                name
            ))),
        }
    }
}

/// The set of equivalence groups enabled for a comparison run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquivalenceGroups {
    numbers: bool,
    spelling: bool,
    misc: bool,
}

impl EquivalenceGroups {
    /// Only exact matches count.
    pub const NONE: EquivalenceGroups = EquivalenceGroups {
        numbers: false,
        spelling: false,
        misc: false,
    };

    pub const ALL: EquivalenceGroups = EquivalenceGroups {
        numbers: true,
        spelling: true,
        misc: true,
    };

    pub fn with(mut self, group: EquivalenceGroup) -> Self {
        match group {
            EquivalenceGroup::Numbers => self.numbers = true,
            EquivalenceGroup::Spelling => self.spelling = true,
            EquivalenceGroup::Misc => self.misc = true,
        }
        self
    }

    pub fn contains(&self, group: EquivalenceGroup) -> bool {
        match group {
            EquivalenceGroup::Numbers => self.numbers,
            EquivalenceGroup::Spelling => self.spelling,
            EquivalenceGroup::Misc => self.misc,
        }
    }

    /// Builds a selection from group names (`none`, `all`, `numbers`, `spelling`, `misc`).
    ///
    /// Every name is validated first. Then `none` anywhere in the list wins, followed by `all`;
    /// otherwise the named groups are combined.
    pub fn from_names<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut has_none = false;
        let mut has_all = false;
        let mut groups = EquivalenceGroups::NONE;

        for name in names {
            match name.as_ref() {
                "none" => has_none = true,
                "all" => has_all = true,
                other => groups = groups.with(other.parse()?),
            }
        }

        if has_none {
            Ok(EquivalenceGroups::NONE)
        } else if has_all {
            Ok(EquivalenceGroups::ALL)
        } else {
            Ok(groups)
        }
    }
}

impl Default for EquivalenceGroups {
    fn default() -> Self {
        EquivalenceGroups::ALL
    }
}

/// One-way, hypothesis-side word replacements (e.g. `21st` -> `twenty first`).
#[derive(Debug, Clone, Default)]
pub struct ConversionTable {
    entries: HashMap<Word, Vec<Word>>,
}

impl ConversionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in numeral-to-word table.
    pub fn number_conversions() -> Self {
        Self::from_pairs(NUMBER_CONVERSIONS)
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(word, phrase)| {
                (
                    word.to_string(),
                    phrase.split_whitespace().map(str::to_string).collect(),
                )
            })
            .collect();

        Self { entries }
    }

    /// Reads a two-column table (`word<delimiter>replacement phrase`) without headers.
    ///
    /// Both columns are lowercased. A row with a column count other than two, an empty key, a key
    /// containing whitespace, or an empty replacement is a configuration error.
    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, Error> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .quoting(false)
            .from_reader(reader);

        let mut entries = HashMap::new();

        for (row_idx, record) in csv_reader.records().enumerate() {
            let record = record?;

            if record.len() != 2 {
                return Err(Error::ConfigError(format!(
                    "Conversion table row {} has {} columns, expected 2",
                    row_idx + 1,
                    record.len()
                )));
            }

            let word = record[0].trim().to_lowercase();
            let phrase: Vec<Word> = record[1]
                .split_whitespace()
                .map(|part| part.to_lowercase())
                .collect();

            if word.is_empty() || word.split_whitespace().count() != 1 {
                return Err(Error::ConfigError(format!(
                    "Conversion table row {} has an invalid key: {:?}",
                    row_idx + 1,
                    &record[0]
                )));
            }

            if phrase.is_empty() {
                return Err(Error::ConfigError(format!(
                    "Conversion table row {} has an empty replacement for {:?}",
                    row_idx + 1,
                    word
                )));
            }

            entries.insert(word, phrase);
        }

        debug!("Loaded {} conversion entries", entries.len());

        Ok(Self { entries })
    }

    /// Loads a table from disk; `.tsv` files are tab-delimited, anything else comma-delimited.
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        let delimiter = match path.extension().and_then(|ext| ext.to_str()) {
            Some("tsv") => b'\t',
            _ => b',',
        };

        Self::from_reader(File::open(path)?, delimiter)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expands a word into its replacement phrase, or returns the word unchanged.
    pub fn convert(&self, word: &WordRef) -> Vec<Word> {
        match self.entries.get(word) {
            Some(phrase) => phrase.clone(),
            None => vec![word.to_string()],
        }
    }
}

/// Answers whether two words are interchangeable and how hypothesis words expand.
///
/// Constructed once per run and shared read-only between alignments.
#[derive(Debug, Clone)]
pub struct EquivalenceResolver {
    conversions: ConversionTable,
    classes: Vec<(EquivalenceGroup, HashSet<Word>)>,
    // Word -> indices into `classes`
    class_index: HashMap<Word, Vec<usize>>,
}

impl EquivalenceResolver {
    pub fn new(conversions: ConversionTable) -> Self {
        Self {
            conversions,
            classes: vec![],
            class_index: HashMap::new(),
        }
    }

    /// The built-in conversion table together with every built-in equivalence class.
    pub fn with_builtin_tables() -> Self {
        Self::new(ConversionTable::number_conversions()).with_builtin_classes()
    }

    /// Adds the built-in numbers, spelling and misc classes.
    pub fn with_builtin_classes(self) -> Self {
        self.with_classes(EquivalenceGroup::Numbers, EQUIV_NUMBERS)
            .with_classes(EquivalenceGroup::Spelling, EQUIV_SPELLING)
            .with_classes(EquivalenceGroup::Misc, EQUIV_MISC)
    }

    pub fn with_classes(mut self, group: EquivalenceGroup, classes: &[&[&str]]) -> Self {
        for class in classes {
            self.add_class(group, class.iter().copied());
        }
        self
    }

    pub fn add_class<'w, I>(&mut self, group: EquivalenceGroup, words: I)
    where
        I: IntoIterator<Item = &'w str>,
    {
        let class: HashSet<Word> = words.into_iter().map(str::to_string).collect();
        let class_idx = self.classes.len();

        for word in &class {
            self.class_index
                .entry(word.clone())
                .or_default()
                .push(class_idx);
        }

        self.classes.push((group, class));
    }

    pub fn convert(&self, word: &WordRef) -> Vec<Word> {
        self.conversions.convert(word)
    }

    /// True when the words are identical or both belong to a class of an enabled group.
    pub fn are_equivalent(
        &self,
        word_a: &WordRef,
        word_b: &WordRef,
        enabled_groups: EquivalenceGroups,
    ) -> bool {
        if word_a == word_b {
            return true;
        }

        let (Some(classes_a), Some(classes_b)) =
            (self.class_index.get(word_a), self.class_index.get(word_b))
        else {
            return false;
        };

        classes_a.iter().any(|class_idx| {
            classes_b.contains(class_idx) && enabled_groups.contains(self.classes[*class_idx].0)
        })
    }
}

impl Default for EquivalenceResolver {
    fn default() -> Self {
        Self::with_builtin_tables()
    }
}
