use crate::types::{Transcription, TranscriptionMap, UtteranceId};
use crate::Error;
use flate2::read::GzDecoder;
use log::{info, warn};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

/// Line layouts understood by the transcription reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `ID<TAB>TEXT`
    Tsv,
    /// `TEXT (ID)`
    Parentheses,
    /// `ID TEXT`
    Space,
}

impl FileFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Tsv => "tsv",
            FileFormat::Parentheses => "parentheses",
            FileFormat::Space => "space",
        }
    }

    /// Guesses the format from the file name and its first line.
    pub fn guess(path: &Path, first_line: &str) -> Self {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("");
        let file_name = file_name.strip_suffix(".gz").unwrap_or(file_name);

        if first_line.contains('\t') || file_name.ends_with("tsv") {
            FileFormat::Tsv
        } else if first_line.trim().ends_with(')') {
            FileFormat::Parentheses
        } else {
            FileFormat::Space
        }
    }
}

impl FromStr for FileFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "tsv" => Ok(FileFormat::Tsv),
            "parentheses" => Ok(FileFormat::Parentheses),
            "space" => Ok(FileFormat::Space),
            _ => Err(Error::ConfigError(format!("Unknown file format: {}", name))),
        }
    }
}

/// Parses transcriptions into a map of utterance id to every transcription for that id, in
/// file order. Blank lines are ignored; lines without an id separator (and tsv rows with more
/// than two fields) are skipped.
pub fn read_transcriptions<R: Read>(
    reader: R,
    format: FileFormat,
) -> Result<TranscriptionMap, Error> {
    let entries = match format {
        FileFormat::Tsv => parse_tsv(reader)?,
        FileFormat::Parentheses => parse_lines(reader, parse_parentheses_line)?,
        FileFormat::Space => parse_lines(reader, parse_space_line)?,
    };

    let mut transcriptions = TranscriptionMap::new();
    for (utterance_id, text) in entries {
        transcriptions.entry(utterance_id).or_default().push(text);
    }

    Ok(transcriptions)
}

/// Reads a transcription file, decompressing `*.gz` files on the fly. When `format` is `None`
/// it is guessed from the file name and first non-blank line.
pub fn read_transcriptions_from_path(
    path: &Path,
    format: Option<FileFormat>,
) -> Result<TranscriptionMap, Error> {
    info!("Reading transcriptions from {:?}...", path);

    let mut file = File::open(path)?;
    let mut bytes = vec![];

    if path.extension().and_then(|ext| ext.to_str()) == Some("gz") {
        GzDecoder::new(file).read_to_end(&mut bytes)?;
    } else {
        file.read_to_end(&mut bytes)?;
    }

    let content = String::from_utf8(bytes)
        .map_err(|err| Error::ParserError(format!("{:?} is not valid UTF-8: {}", path, err)))?;

    let format = format.unwrap_or_else(|| {
        let first_line = content
            .lines()
            .find(|line| !line.trim().is_empty())
            .unwrap_or("");
        FileFormat::guess(path, first_line)
    });

    let transcriptions = read_transcriptions(content.as_bytes(), format)?;
    info!(
        "Read {} utterances ({} format)",
        transcriptions.len(),
        format.as_str()
    );

    Ok(transcriptions)
}

fn parse_tsv<R: Read>(reader: R) -> Result<Vec<(UtteranceId, Transcription)>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut entries = vec![];

    for record in csv_reader.records() {
        let record = record?;

        if record.len() < 2 {
            if record.iter().any(|field| !field.trim().is_empty()) {
                warn!("Skipping malformed row: {:?}", record);
            }
            continue;
        }

        if record.len() > 2 {
            warn!(
                "Skipping row with {} fields, expected 2: {:?}",
                record.len(),
                record
            );
            continue;
        }

        let utterance_id = record[0].trim();
        if utterance_id.is_empty() {
            warn!("Skipping row without an utterance id: {:?}", record);
            continue;
        }

        entries.push((utterance_id.to_string(), record[1].to_string()));
    }

    Ok(entries)
}

fn parse_lines<R, F>(
    mut reader: R,
    parse_line: F,
) -> Result<Vec<(UtteranceId, Transcription)>, Error>
where
    R: Read,
    F: Fn(&str) -> Option<(UtteranceId, Transcription)>,
{
    let mut content = String::new();
    reader.read_to_string(&mut content)?;

    let entries = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let entry = parse_line(line.trim_end());
            if entry.is_none() {
                warn!("Skipping malformed line: {:?}", line);
            }
            entry
        })
        .collect();

    Ok(entries)
}

/// `TEXT (ID)`; a bare `(ID)` is an utterance with empty text.
fn parse_parentheses_line(line: &str) -> Option<(UtteranceId, Transcription)> {
    let (text, id_token) = line.rsplit_once(' ').unwrap_or(("", line));

    let utterance_id = id_token.strip_prefix('(')?.strip_suffix(')')?;
    if utterance_id.is_empty() {
        return None;
    }

    Some((utterance_id.to_string(), text.to_string()))
}

/// `ID TEXT`
fn parse_space_line(line: &str) -> Option<(UtteranceId, Transcription)> {
    let (utterance_id, text) = line.split_once(' ')?;
    if utterance_id.is_empty() {
        return None;
    }

    Some((utterance_id.to_string(), text.to_string()))
}
