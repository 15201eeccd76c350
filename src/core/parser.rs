//! Filename template inference module.
//!
//! Works out where the episode number sits in a series' filenames and
//! produces a reusable template for locating any episode:
//! - Two or more filenames: diff the most similar pair position-by-position
//! - One filename: fall back to a positional regex guess
//!
//! The engine is pure: it never touches the filesystem and holds no state
//! beyond its immutable configuration.

use crate::{Error, Result};
use regex::Regex;

/// Parser configuration.
///
/// All knobs of the inference engine live here so tests can run with
/// alternate placeholders or ignore words.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Token substituted with the episode number during resolution.
    pub placeholder: String,
    /// Token marking a region stripped by the ignore-word rewrite; becomes
    /// a `*` wildcard during resolution.
    pub glob_placeholder: String,
    /// Noise words elided when they follow a digit (case-sensitive).
    pub ignore_words: Vec<String>,
    /// Preferred Levenshtein distance when choosing the comparison pair.
    pub preferred_distance: usize,
    /// Digits in a substituted episode number.
    pub pad_width: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            placeholder: "{}".to_string(),
            glob_placeholder: "{*}".to_string(),
            ignore_words: vec!["END".to_string()],
            preferred_distance: 2,
            pad_width: 2,
        }
    }
}

/// Result of a successful inference: the template and the episode range
/// present in the sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredTemplate {
    /// Template with one placeholder at the episode-number position.
    pub template: String,
    /// Smallest episode number seen in the sample.
    pub first_ep: u32,
    /// Largest episode number seen in the sample.
    pub last_ep: u32,
}

/// A template resolved for a concrete episode number.
///
/// `Glob` is produced if and only if the template carries the glob
/// placeholder; the pattern then contains exactly one `*` and expanding it
/// against the filesystem is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EpisodePattern {
    Exact(String),
    Glob(String),
}

/// Filename template parser.
pub struct TemplateParser {
    config: ParserConfig,
    ignore_re: Option<Regex>,
    guess_re: Regex,
}

impl TemplateParser {
    /// Create a new parser with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default())
    }

    /// Create a new parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        let ignore_re = if config.ignore_words.is_empty() {
            None
        } else {
            let words = config
                .ignore_words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(\d)\s+(?:{words})\b");
            Some(Regex::new(&pattern).expect("ignore words are escaped"))
        };

        // A two-digit run not adjacent to other digits and not preceded by
        // an "S" season marker.
        let guess_re =
            Regex::new(r"(?:^|[^0-9S])([0-9]{2})(?:[^0-9]|$)").expect("static pattern");

        Self {
            config,
            ignore_re,
            guess_re,
        }
    }

    /// Parse filenames to find where the episode number is.
    ///
    /// The more filenames there are, the more accurate the template
    /// becomes. With more than two, the two most similar in terms of
    /// Levenshtein distance are diffed; with exactly one the positional
    /// guesser runs instead and `Ok(None)` means no template could be
    /// guessed, a recoverable state the caller should answer by supplying
    /// more filenames.
    pub fn parse(&self, filenames: &[String]) -> Result<Option<InferredTemplate>> {
        if filenames.is_empty() {
            return Ok(None);
        }

        let (sample, stripped) = self.strip_ignore_words(filenames);

        if sample.len() < 2 {
            return Ok(self.guess_stripped(&sample[0], stripped));
        }

        let (fn1, fn2) = self.similar_two(&sample);

        let len1 = fn1.chars().count();
        let len2 = fn2.chars().count();
        if len1 != len2 {
            return Err(Error::LengthMismatch(len1, len2));
        }

        let (template, placeholder_idx) = self.diff_pair(fn1, fn2, stripped);

        // Assume the template is correct and recover the episode range
        // from every filename of the reference length.
        let mut numbers: Vec<u32> = sample
            .iter()
            .filter(|f| f.chars().count() == len1)
            .filter_map(|f| leading_number(f, placeholder_idx))
            .collect();

        if numbers.is_empty() {
            return Err(Error::NoEpisodeNumbersFound(template));
        }
        numbers.sort_unstable();

        Ok(Some(InferredTemplate {
            template,
            first_ep: numbers[0],
            last_ep: numbers[numbers.len() - 1],
        }))
    }

    /// Guess the template from a single filename.
    ///
    /// Accuracy is lower than `parse` with multiple filenames: the episode
    /// number is assumed to be exactly two digits.
    pub fn guess_template(&self, filename: &str) -> Option<InferredTemplate> {
        let sample = [filename.to_string()];
        let (sample, stripped) = self.strip_ignore_words(&sample);
        self.guess_stripped(&sample[0], stripped)
    }

    /// Substitute `episode` into `template`, zero-padded to the configured
    /// width. A template carrying the glob placeholder resolves to a
    /// shell-glob pattern with a single `*` wildcard.
    pub fn episode_pattern(&self, template: &str, episode: u32) -> Result<EpisodePattern> {
        if !template.contains(self.config.placeholder.as_str()) {
            return Err(Error::InvalidTemplate(template.to_string()));
        }

        let number = format!("{:0width$}", episode, width = self.config.pad_width);
        let path = template.replacen(self.config.placeholder.as_str(), &number, 1);

        if path.contains(self.config.glob_placeholder.as_str()) {
            Ok(EpisodePattern::Glob(path.replacen(
                self.config.glob_placeholder.as_str(),
                "*",
                1,
            )))
        } else {
            Ok(EpisodePattern::Exact(path))
        }
    }

    /// Strip ignore-word suffixes from the sample.
    ///
    /// If any filename contains a digit followed by whitespace and an
    /// ignore word ("42 END foo.mp4"), every filename is rewritten with the
    /// suffix deleted and the returned flag is set. The input is never
    /// mutated.
    fn strip_ignore_words(&self, filenames: &[String]) -> (Vec<String>, bool) {
        let Some(re) = &self.ignore_re else {
            return (filenames.to_vec(), false);
        };

        if !filenames.iter().any(|f| re.is_match(f)) {
            return (filenames.to_vec(), false);
        }

        let rewritten = filenames
            .iter()
            .map(|f| re.replace_all(f, "$1").into_owned())
            .collect();
        (rewritten, true)
    }

    /// Find the two most informative filenames in the sample.
    ///
    /// A pair differing by exactly `preferred_distance` edits is ideal:
    /// with a two-digit episode number, everything that differs is most
    /// likely the number itself. Pairs of unequal length cannot be
    /// positionally diffed and are skipped. When nothing qualifies the
    /// first two filenames are the fallback.
    fn similar_two<'a>(&self, sample: &'a [String]) -> (&'a str, &'a str) {
        let preferred = self.config.preferred_distance;
        let mut best: Option<(usize, &str, &str)> = None;

        for (i, a) in sample.iter().enumerate() {
            for b in &sample[i + 1..] {
                if a.chars().count() != b.chars().count() {
                    continue;
                }

                let dist = strsim::levenshtein(a, b);
                if dist == preferred {
                    return (a, b);
                }
                if dist > preferred && best.map_or(true, |(d, _, _)| dist < d) {
                    best = Some((dist, a, b));
                }
            }
        }

        match best {
            Some((_, a, b)) => (a, b),
            None => (&sample[0], &sample[1]),
        }
    }

    /// Diff an equal-length pair position-by-position.
    ///
    /// The first divergence opens the placeholder (followed by the glob
    /// placeholder when `glob` is set) and records its character index;
    /// later divergent characters are consumed without emitting anything.
    /// The variable region is assumed to be a single contiguous run, so
    /// filenames with multiple disjoint numeric regions collapse into one
    /// placeholder. Known limitation, kept: callers depend on templates
    /// containing exactly one placeholder.
    fn diff_pair(&self, fn1: &str, fn2: &str, glob: bool) -> (String, usize) {
        let mut template = String::with_capacity(fn1.len() + 4);
        let mut placeholder_idx = 0;
        let mut open = false;

        for (i, (c1, c2)) in fn1.chars().zip(fn2.chars()).enumerate() {
            if c1 == c2 {
                template.push(c1);
            } else if !open {
                open = true;
                placeholder_idx = i;
                template.push_str(&self.config.placeholder);
                if glob {
                    template.push_str(&self.config.glob_placeholder);
                }
            }
        }

        (template, placeholder_idx)
    }

    fn guess_stripped(&self, filename: &str, glob: bool) -> Option<InferredTemplate> {
        let caps = self.guess_re.captures(filename)?;
        let m = caps.get(1)?;
        let ep = m.as_str().parse::<u32>().ok()?;

        let mut template = String::with_capacity(filename.len() + 4);
        template.push_str(&filename[..m.start()]);
        template.push_str(&self.config.placeholder);
        if glob {
            template.push_str(&self.config.glob_placeholder);
        }
        template.push_str(&filename[m.end()..]);

        Some(InferredTemplate {
            template,
            first_ep: ep,
            last_ep: ep,
        })
    }
}

impl Default for TemplateParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the run of decimal digits starting at char index `idx`.
fn leading_number(filename: &str, idx: usize) -> Option<u32> {
    let digits: String = filename
        .chars()
        .skip(idx)
        .take_while(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        None
    } else {
        digits.parse().ok()
    }
}
