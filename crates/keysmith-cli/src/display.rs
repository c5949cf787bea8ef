//! Display cosmetics for chord names, degrees and note lists.

/// Substitute quality suffixes with their typographic glyphs: a trailing
/// `o` or `-` (diminished) becomes `°`, a trailing `+` (augmented) becomes
/// `⁺`. With `verbose`, minor/diminished/augmented names also get a spelled
/// out annotation.
pub fn pretty_quality(val: &str, verbose: bool) -> String {
    if let Some(root) = val.strip_suffix(['o', '-']) {
        let pretty = format!("{root}°");
        if verbose {
            format!("{pretty} (dim)")
        } else {
            pretty
        }
    } else if let Some(root) = val.strip_suffix('+') {
        let pretty = format!("{root}⁺");
        if verbose {
            format!("{pretty} (aug)")
        } else {
            pretty
        }
    } else if val.ends_with('m') && verbose {
        format!("{val} (min)")
    } else {
        val.to_string()
    }
}

/// Join the notes of a triad for display.
pub fn join_notes(notes: &[String], sep: &str) -> String {
    notes.join(sep)
}

/// Title Case for scale-type names ("natural minor" -> "Natural Minor").
pub fn title_case(name: &str) -> String {
    name.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
