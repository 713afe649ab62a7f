//! Ordered substitution passes.
//!
//! Each pass is a list of literal replacements applied in declaration order.
//! Pass N sees the output of pass N-1.

/// A named list of literal substring replacements.
#[derive(Debug, Clone, Copy)]
pub struct SubstitutionPass {
    pub name: &'static str,
    pub rules: &'static [(&'static str, &'static str)],
}

impl SubstitutionPass {
    /// Apply every rule in order, replacing all occurrences of each.
    pub fn apply(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (from, to) in self.rules {
            if output.contains(from) {
                output = output.replace(from, to);
            }
        }
        output
    }
}

/// Fraction glyphs. Runs before the generic pass, which would split
/// the slash and spell the digits separately.
pub const FRACTIONS: SubstitutionPass = SubstitutionPass {
    name: "fractions",
    rules: &[("1/2", "Half"), ("1/4", "Quarter"), ("3/4", "ThreeQuarters")],
};

/// Punctuation, symbols, qualifiers and digits.
pub const GENERIC: SubstitutionPass = SubstitutionPass {
    name: "generic",
    rules: &[
        ("-", " "),
        (".", " "),
        ("/", " "),
        (",", ""),
        ("'", ""),
        ("+", "Plus"),
        ("&", "And"),
        ("(Hand)", "Hand"),
        ("(JS)", "JS"),
        ("(Old)", "Old"),
        ("0", "Zero"),
        ("1", "One"),
        ("2", "Two"),
        ("3", "Three"),
        ("4", "Four"),
        ("5", "Five"),
        ("6", "Six"),
        ("7", "Seven"),
        ("8", "Eight"),
        ("9", "Nine"),
    ],
};

/// All passes in execution order.
pub const PASSES: &[SubstitutionPass] = &[FRACTIONS, GENERIC];

/// Run all passes over `label`.
pub fn substitute(label: &str) -> String {
    PASSES
        .iter()
        .fold(label.to_string(), |current, pass| pass.apply(&current))
}
