use crate::models::{EquivalenceGroups, WerConfig};

pub const DEFAULT_WER_CONFIG: WerConfig = WerConfig {
    equivalence_groups: EquivalenceGroups::ALL,
    nbest: false,
    partial_id_matching: true,
    apply_conversions: true,
};

/// Hypothesis-side numeral normalization (applied before alignment).
pub const NUMBER_CONVERSIONS: &[(&str, &str)] = &[
    ("1", "one"),
    ("2", "two"),
    ("3", "three"),
    ("4", "four"),
    ("5", "five"),
    ("6", "six"),
    ("7", "seven"),
    ("8", "eight"),
    ("9", "nine"),
    ("10", "ten"),
    ("11", "eleven"),
    ("12", "twelve"),
    ("13", "thirteen"),
    ("14", "fourteen"),
    ("15", "fifteen"),
    ("16", "sixteen"),
    ("17", "seventeen"),
    ("18", "eighteen"),
    ("19", "nineteen"),
    ("20", "twenty"),
    ("21", "twenty one"),
    ("22", "twenty two"),
    ("23", "twenty three"),
    ("24", "twenty four"),
    ("25", "twenty five"),
    ("26", "twenty six"),
    ("27", "twenty seven"),
    ("28", "twenty eight"),
    ("29", "twenty nine"),
    ("30", "thirty"),
    ("31", "thirty one"),
    ("1st", "first"),
    ("2nd", "second"),
    ("3rd", "third"),
    ("4th", "fourth"),
    ("5th", "fifth"),
    ("6th", "sixth"),
    ("7th", "seventh"),
    ("8th", "eighth"),
    ("9th", "ninth"),
    ("10th", "tenth"),
    ("11th", "eleventh"),
    ("12th", "twelfth"),
    ("13th", "thirteenth"),
    ("14th", "fourteenth"),
    ("15th", "fifteenth"),
    ("16th", "sixteenth"),
    ("17th", "seventeenth"),
    ("18th", "eighteenth"),
    ("19th", "nineteenth"),
    ("20th", "twentieth"),
    ("21st", "twenty first"),
    ("22nd", "twenty second"),
    ("23rd", "twenty third"),
    ("24th", "twenty fourth"),
    ("25th", "twenty fifth"),
    ("26th", "twenty sixth"),
    ("27th", "twenty seventh"),
    ("28th", "twenty eighth"),
    ("29th", "twenty ninth"),
    ("30th", "thirtieth"),
    ("31st", "thirty first"),
    ("2014", "two thousand fourteen"),
];

pub const EQUIV_NUMBERS: &[&[&str]] = &[
    &["four", "fourth"],
    &["five", "fifth"],
    &["six", "sixth"],
    &["seven", "seventh"],
    &["eight", "eighth"],
    &["nine", "ninth"],
    &["ten", "tenth"],
    &["eleven", "eleventh"],
    &["twelve", "twelfth"],
    &["thirteen", "thirteenth"],
    &["fourteen", "fourteenth"],
    &["fifteen", "fifteenth"],
    &["sixteen", "sixteenth"],
    &["seventeen", "seventeenth"],
    &["eighteen", "eighteenth"],
    &["nineteen", "nineteenth"],
    &["twenty", "twentieth"],
    &["thirty", "thirtieth"],
];

pub const EQUIV_SPELLING: &[&[&str]] = &[
    &["o'hare", "ohare"],
    &["lets", "let's"],
    &["don't", "dont"],
    &["didn't", "didnt"],
    &["doesn't", "doesnt"],
    &["what's", "whats"],
    &["that's", "thats"],
    &["it's", "its"],
    &["n", "and"],
    &["ok", "okay"],
    &["st", "st.", "saint"],
    &["o'clock", "oclock"],
    &["allegany", "allegheny"],
    &["through", "thru"],
];

pub const EQUIV_MISC: &[&[&str]] = &[
    &["the", "a"],
    &["hotel", "hotels"],
    &["night", "nights"],
];

/// Tokens removed from both reference and hypothesis before alignment.
pub const IGNORABLES: &[&str] = &["[noise]"];

pub const SUBSTITUTION_MARKER: char = '#';
pub const INSERTION_FILLER: char = '+';
pub const DELETION_FILLER: char = '-';

/// Rendered on both diff lines when an alignment has no steps at all.
pub const EMPTY_ALIGNMENT_PLACEHOLDER: &str = "///EMPTY///";

/// Printed between consecutive report sections.
pub const REPORT_SECTION_SEPARATOR_WIDTH: usize = 80;
