//! Chord names: parsing, transposition and rendering.
//!
//! A chord is a root note, a free-form suffix and an optional bass note after a
//! slash, e.g. `C#m7/G#`. Notes are a letter `A`-`G` followed by any number of
//! `#` / `b` accidentals; pitch classes wrap modulo 12.

use std::fmt;
use std::str::FromStr;

use crate::error::SongsheetError;

const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];
const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// A pitch class, 0 (`C`) through 11 (`B`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch(u8);

impl Pitch {
    /// Pitch class for `value`, wrapped into `0..12`.
    pub fn new(value: i64) -> Self {
        // rem_euclid(12) is always within 0..12
        Self(u8::try_from(value.rem_euclid(12)).unwrap_or(0))
    }

    pub fn value(self) -> i64 {
        i64::from(self.0)
    }

    #[must_use]
    pub fn transpose(self, semitones: i64) -> Self {
        Self::new(self.value() + semitones.rem_euclid(12))
    }

    pub fn name(self, flats: bool) -> &'static str {
        let names = if flats { &FLAT_NAMES } else { &SHARP_NAMES };
        names.get(usize::from(self.0)).copied().unwrap_or("C")
    }

    /// Parse a note at the start of `text`, returning the pitch and the rest.
    fn parse_prefix(text: &str) -> Option<(Self, &str)> {
        let mut chars = text.chars();
        let base = match chars.next()? {
            'C' => 0,
            'D' => 2,
            'E' => 4,
            'F' => 5,
            'G' => 7,
            'A' => 9,
            'B' => 11,
            _ => return None,
        };

        let rest = chars.as_str();
        let accidentals = rest
            .chars()
            .take_while(|c| matches!(c, '#' | 'b'))
            .count();
        let offset: i64 = rest
            .chars()
            .take(accidentals)
            .map(|c| if c == '#' { 1 } else { -1 })
            .sum();

        // accidentals are single-byte, so `accidentals` is a byte offset too
        Some((Self::new(base + offset), rest.get(accidentals..).unwrap_or("")))
    }
}

/// A parsed chord name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Chord {
    pub root: Pitch,
    pub suffix: String,
    pub bass: Option<Pitch>,
}

impl Chord {
    /// Parse a chord name, ignoring surrounding whitespace.
    pub fn parse(text: &str) -> Option<Self> {
        let (root, rest) = Pitch::parse_prefix(text.trim())?;

        let (suffix, bass) = match rest.split_once('/') {
            Some((suffix, bass)) => {
                let (pitch, tail) = Pitch::parse_prefix(bass)?;
                if !tail.is_empty() {
                    return None;
                }
                (suffix, Some(pitch))
            }
            None => (rest, None),
        };

        Some(Self {
            root,
            suffix: suffix.to_string(),
            bass,
        })
    }

    #[must_use]
    pub fn transpose(&self, semitones: i64) -> Self {
        Self {
            root: self.root.transpose(semitones),
            suffix: self.suffix.clone(),
            bass: self.bass.map(|bass| bass.transpose(semitones)),
        }
    }

    /// Signed distance between the roots, in `-11..=11`.
    pub fn semitones_to(&self, other: &Chord) -> i64 {
        other.root.value() - self.root.value()
    }

    /// Chord name with sharps, or flats when `flats` is set.
    pub fn render(&self, flats: bool) -> String {
        let mut name = format!("{}{}", self.root.name(flats), self.suffix);
        if let Some(bass) = self.bass {
            name.push('/');
            name.push_str(bass.name(flats));
        }
        name
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl FromStr for Chord {
    type Err = SongsheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Chord::parse(s).ok_or_else(|| SongsheetError::CellConversion {
            expected: "chord",
            found: s.to_string(),
        })
    }
}

/// Prefix `text` with `!` to flag it as an unparseable chord, once.
pub fn mark_invalid(text: &str) -> String {
    if text.starts_with('!') {
        text.to_string()
    } else {
        format!("!{text}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("C", 2, "D")]
    #[test_case("B", 1, "C")]
    #[test_case("C", -1, "B")]
    #[test_case("Am7", 3, "Cm7")]
    #[test_case("C/E", 2, "D/F#")]
    #[test_case("Bb", 0, "A#")]
    #[test_case("Cb", 0, "B")]
    #[test_case("E#", 0, "F")]
    #[test_case("C##", 0, "D")]
    #[test_case("Dsus4", 26, "Esus4")]
    fn test_transpose(input: &str, semitones: i64, expected: &str) {
        assert_eq!(Chord::parse(input).unwrap().transpose(semitones).to_string(), expected);
    }

    #[test_case("")]
    #[test_case("H")]
    #[test_case("c")]
    #[test_case("Verse")]
    #[test_case("C/X")]
    #[test_case("C/E7")]
    fn test_invalid(input: &str) {
        assert!(Chord::parse(input).is_none());
    }

    #[test]
    fn test_suffix_kept_verbatim() {
        let chord = Chord::parse(" F#m7b5 ").unwrap();
        assert_eq!(chord.root, Pitch::new(6));
        assert_eq!(chord.suffix, "m7b5");
        assert_eq!(chord.bass, None);
    }

    #[test]
    fn test_render_flats() {
        let chord = Chord::parse("A#/C#").unwrap();
        assert_eq!(chord.render(true), "Bb/Db");
        assert_eq!(chord.render(false), "A#/C#");
    }

    #[test]
    fn test_semitones_to() {
        let c = Chord::parse("C").unwrap();
        let a = Chord::parse("Am").unwrap();
        assert_eq!(c.semitones_to(&a), 9);
        assert_eq!(a.semitones_to(&c), -9);
        assert_eq!(c.semitones_to(&c), 0);
    }

    #[test]
    fn test_extreme_semitones_wrap() {
        let chord = Chord::parse("C#m7/G").unwrap();
        // i64::MAX is 7 mod 12, i64::MIN is 4 mod 12
        assert_eq!(chord.transpose(i64::MAX).to_string(), "G#m7/D");
        assert_eq!(chord.transpose(i64::MIN).to_string(), "Fm7/B");
    }

    #[test]
    fn test_mark_invalid_once() {
        assert_eq!(mark_invalid("Foo"), "!Foo");
        assert_eq!(mark_invalid("!Foo"), "!Foo");
    }

    #[test]
    fn test_from_str() {
        assert!("G7".parse::<Chord>().is_ok());
        assert!("nope".parse::<Chord>().is_err());
    }
}
