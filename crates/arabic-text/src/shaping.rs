//! Contextual reshaping into Arabic Presentation Forms-B
//!
//! Maps each Arabic letter to its isolated, final, initial, or medial glyph
//! depending on whether the neighbouring letters join to it. Combining marks
//! are transparent to joining. Characters without an entry in the table
//! (Latin text, digits, punctuation, text that is already in presentation
//! forms) pass through unchanged.

/// Joining behaviour of a letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joining {
    /// Joins to both neighbours (most letters)
    Dual,
    /// Joins only to the preceding letter (alef, dal, reh, waw, ...)
    Right,
    /// Never joins (hamza)
    None,
}

/// Presentation forms for one letter
struct Forms {
    isolated: char,
    fina: char,
    initial: char,
    medial: char,
    joining: Joining,
}

const fn dual(isolated: char, fina: char, initial: char, medial: char) -> Forms {
    Forms {
        isolated,
        fina,
        initial,
        medial,
        joining: Joining::Dual,
    }
}

const fn right(isolated: char, fina: char) -> Forms {
    Forms {
        isolated,
        fina,
        initial: isolated,
        medial: fina,
        joining: Joining::Right,
    }
}

/// Presentation forms table for the Arabic block (U+0621..U+064A)
fn forms(c: char) -> Option<Forms> {
    let f = match c {
        '\u{0621}' => Forms {
            isolated: '\u{FE80}',
            fina: '\u{FE80}',
            initial: '\u{FE80}',
            medial: '\u{FE80}',
            joining: Joining::None,
        },
        '\u{0622}' => right('\u{FE81}', '\u{FE82}'),
        '\u{0623}' => right('\u{FE83}', '\u{FE84}'),
        '\u{0624}' => right('\u{FE85}', '\u{FE86}'),
        '\u{0625}' => right('\u{FE87}', '\u{FE88}'),
        '\u{0626}' => dual('\u{FE89}', '\u{FE8A}', '\u{FE8B}', '\u{FE8C}'),
        '\u{0627}' => right('\u{FE8D}', '\u{FE8E}'),
        '\u{0628}' => dual('\u{FE8F}', '\u{FE90}', '\u{FE91}', '\u{FE92}'),
        '\u{0629}' => right('\u{FE93}', '\u{FE94}'),
        '\u{062A}' => dual('\u{FE95}', '\u{FE96}', '\u{FE97}', '\u{FE98}'),
        '\u{062B}' => dual('\u{FE99}', '\u{FE9A}', '\u{FE9B}', '\u{FE9C}'),
        '\u{062C}' => dual('\u{FE9D}', '\u{FE9E}', '\u{FE9F}', '\u{FEA0}'),
        '\u{062D}' => dual('\u{FEA1}', '\u{FEA2}', '\u{FEA3}', '\u{FEA4}'),
        '\u{062E}' => dual('\u{FEA5}', '\u{FEA6}', '\u{FEA7}', '\u{FEA8}'),
        '\u{062F}' => right('\u{FEA9}', '\u{FEAA}'),
        '\u{0630}' => right('\u{FEAB}', '\u{FEAC}'),
        '\u{0631}' => right('\u{FEAD}', '\u{FEAE}'),
        '\u{0632}' => right('\u{FEAF}', '\u{FEB0}'),
        '\u{0633}' => dual('\u{FEB1}', '\u{FEB2}', '\u{FEB3}', '\u{FEB4}'),
        '\u{0634}' => dual('\u{FEB5}', '\u{FEB6}', '\u{FEB7}', '\u{FEB8}'),
        '\u{0635}' => dual('\u{FEB9}', '\u{FEBA}', '\u{FEBB}', '\u{FEBC}'),
        '\u{0636}' => dual('\u{FEBD}', '\u{FEBE}', '\u{FEBF}', '\u{FEC0}'),
        '\u{0637}' => dual('\u{FEC1}', '\u{FEC2}', '\u{FEC3}', '\u{FEC4}'),
        '\u{0638}' => dual('\u{FEC5}', '\u{FEC6}', '\u{FEC7}', '\u{FEC8}'),
        '\u{0639}' => dual('\u{FEC9}', '\u{FECA}', '\u{FECB}', '\u{FECC}'),
        '\u{063A}' => dual('\u{FECD}', '\u{FECE}', '\u{FECF}', '\u{FED0}'),
        '\u{0640}' => dual('\u{0640}', '\u{0640}', '\u{0640}', '\u{0640}'),
        '\u{0641}' => dual('\u{FED1}', '\u{FED2}', '\u{FED3}', '\u{FED4}'),
        '\u{0642}' => dual('\u{FED5}', '\u{FED6}', '\u{FED7}', '\u{FED8}'),
        '\u{0643}' => dual('\u{FED9}', '\u{FEDA}', '\u{FEDB}', '\u{FEDC}'),
        '\u{0644}' => dual('\u{FEDD}', '\u{FEDE}', '\u{FEDF}', '\u{FEE0}'),
        '\u{0645}' => dual('\u{FEE1}', '\u{FEE2}', '\u{FEE3}', '\u{FEE4}'),
        '\u{0646}' => dual('\u{FEE5}', '\u{FEE6}', '\u{FEE7}', '\u{FEE8}'),
        '\u{0647}' => dual('\u{FEE9}', '\u{FEEA}', '\u{FEEB}', '\u{FEEC}'),
        '\u{0648}' => right('\u{FEED}', '\u{FEEE}'),
        '\u{0649}' => right('\u{FEEF}', '\u{FEF0}'),
        '\u{064A}' => dual('\u{FEF1}', '\u{FEF2}', '\u{FEF3}', '\u{FEF4}'),
        _ => return None,
    };
    Some(f)
}

/// Lam-alef ligatures: (isolated, final) for lam followed by an alef variant
fn lam_alef_ligature(alef: char) -> Option<(char, char)> {
    match alef {
        '\u{0622}' => Some(('\u{FEF5}', '\u{FEF6}')),
        '\u{0623}' => Some(('\u{FEF7}', '\u{FEF8}')),
        '\u{0625}' => Some(('\u{FEF9}', '\u{FEFA}')),
        '\u{0627}' => Some(('\u{FEFB}', '\u{FEFC}')),
        _ => None,
    }
}

/// Combining marks that do not interrupt joining (harakat, superscript alef)
fn is_transparent(c: char) -> bool {
    matches!(c, '\u{0610}'..='\u{061A}' | '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// Reshape Arabic letters into their contextual presentation forms
///
/// Operates in logical order; the result still needs bidirectional
/// reordering before it can be drawn left-to-right.
pub fn reshape(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    // Whether the previous letter joins forward into the current one
    let mut prev_joins = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_transparent(c) {
            out.push(c);
            i += 1;
            continue;
        }

        let f = match forms(c) {
            Some(f) => f,
            None => {
                out.push(c);
                prev_joins = false;
                i += 1;
                continue;
            }
        };

        // Lam directly followed by an alef variant forms a ligature
        if c == '\u{0644}' {
            if let Some(&next) = chars.get(i + 1) {
                if let Some((isolated, fina)) = lam_alef_ligature(next) {
                    out.push(if prev_joins { fina } else { isolated });
                    prev_joins = false; // alef does not join forward
                    i += 2;
                    continue;
                }
            }
        }

        let next_joins_backward = chars[i + 1..]
            .iter()
            .find(|&&n| !is_transparent(n))
            .and_then(|&n| forms(n))
            .map(|nf| nf.joining != Joining::None)
            .unwrap_or(false);

        let joins_forward = f.joining == Joining::Dual;
        let shaped = match (prev_joins, joins_forward && next_joins_backward) {
            (true, true) => f.medial,
            (true, false) => f.fina,
            (false, true) => f.initial,
            (false, false) => f.isolated,
        };
        out.push(shaped);
        prev_joins = joins_forward;
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn shaped(text: &str) -> Vec<char> {
        reshape(text).chars().collect()
    }

    #[test]
    fn test_reshape_mohammed() {
        // م ح م د: initial, medial, medial, final
        assert_eq!(
            shaped("محمد"),
            vec!['\u{FEE3}', '\u{FEA4}', '\u{FEE4}', '\u{FEAA}']
        );
    }

    #[test]
    fn test_reshape_lam_alef() {
        // س ل ا م: seen initial, lam-alef final ligature, meem isolated
        assert_eq!(shaped("سلام"), vec!['\u{FEB3}', '\u{FEFC}', '\u{FEE1}']);
    }

    #[test]
    fn test_reshape_lam_alef_word_start() {
        // ل ا alone: isolated ligature
        assert_eq!(shaped("لا"), vec!['\u{FEFB}']);
    }

    #[test]
    fn test_reshape_single_letter() {
        assert_eq!(shaped("ب"), vec!['\u{FE8F}']);
    }

    #[test]
    fn test_reshape_right_joining_breaks_connection() {
        // د ر: both right-joining, neither connects to the next,
        // so both stay isolated
        assert_eq!(shaped("در"), vec!['\u{FEA9}', '\u{FEAD}']);
    }

    #[test]
    fn test_reshape_hamza_does_not_join() {
        // ب ء ب: hamza never joins, so both behs stay isolated
        assert_eq!(
            shaped("بءب"),
            vec!['\u{FE8F}', '\u{FE80}', '\u{FE8F}']
        );
    }

    #[test]
    fn test_reshape_transparent_marks_kept() {
        // ب َ ب: fatha passes through, behs still join across it
        assert_eq!(
            shaped("ب\u{064E}ب"),
            vec!['\u{FE91}', '\u{064E}', '\u{FE90}']
        );
    }

    #[test]
    fn test_reshape_word_boundary() {
        // Space breaks joining
        assert_eq!(
            shaped("بب بب"),
            vec!['\u{FE91}', '\u{FE90}', ' ', '\u{FE91}', '\u{FE90}']
        );
    }

    #[test]
    fn test_reshape_latin_passthrough() {
        assert_eq!(reshape("Mary"), "Mary");
    }

    #[test]
    fn test_reshape_presentation_forms_passthrough() {
        // Already-shaped text (like the accompaniment prefix) is untouched
        let prefix = "\u{FE91}\u{FEE4}\u{FEAE}";
        assert_eq!(reshape(prefix), prefix);
    }

    #[test]
    fn test_reshape_empty() {
        assert_eq!(reshape(""), "");
    }
}
