//! Filename classification for the clinical image pool.
//!
//! Clinical photos arrive as a flat directory of exports from slit-lamp and
//! topography workstations. There is no metadata to lean on — the filename is
//! the only signal. Filenames loosely follow a `category_detail_NN.ext`
//! convention (`keratoconus_cornea_topography_01.jpg`), but years of manual
//! re-exports mean the convention is advisory at best, so classification works
//! on keyword substrings rather than strict parsing.
//!
//! ## First match wins
//!
//! Classification runs an ordered rule table ([`RULES`]) against the
//! lowercased filename and stops at the first rule with a matching keyword.
//! Rule order is part of the contract: many filenames satisfy several rules
//! (a dry-eye photo named `dryeye_cornea_stain_03.jpg` also contains
//! "cornea"), and the authored order resolves the ambiguity. More specific
//! rules come before broader anatomical ones.
//!
//! ## Display titles
//!
//! [`derive_title`] turns a filename into a human-readable caption: the
//! extension, leading numeric tokens, the category token, and trailing
//! re-export markers (`dup`, `copy`, `edit`) are stripped; the remaining
//! tokens are title-cased and joined with spaces.
//!
//! - `keratoconus_cornea_topography_01.jpg` → "Cornea Topography 01"
//! - `dryeye_tear_film_break_up.png` → "Tear Film Break Up"
//! - `03_glaucoma_optic-nerve.jpg` → "Optic Nerve"

/// One classification rule: if any keyword occurs in the lowercased filename,
/// the image belongs to `condition`.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub keywords: &'static [&'static str],
    pub condition: &'static str,
}

/// Ordered classification table, evaluated top to bottom, first match wins.
///
/// Ordering notes, in case you are tempted to sort this:
/// - `dry-eye` precedes `corneal-disease` — fluorescein staining photos are
///   routinely named with both "dryeye" and "cornea".
/// - `keratoconus` precedes `corneal-disease` — topography exports mention
///   the cornea in almost every filename.
/// - `diabetic-retinopathy` and `macular-degeneration` precede the broad
///   `retinal-detachment` rule keyed on plain "retina".
pub const RULES: &[Rule] = &[
    Rule {
        keywords: &["keratoconus", "kc_", "crosslink"],
        condition: "keratoconus",
    },
    Rule {
        keywords: &["dryeye", "dry_eye", "dry-eye", "tear", "meibomian"],
        condition: "dry-eye",
    },
    Rule {
        keywords: &["cataract", "phaco", "iol"],
        condition: "cataracts",
    },
    Rule {
        keywords: &["glaucoma", "optic_nerve", "optic-nerve", "tonometry"],
        condition: "glaucoma",
    },
    Rule {
        keywords: &["diabetic", "retinopathy"],
        condition: "diabetic-retinopathy",
    },
    Rule {
        keywords: &["macular", "amd", "drusen"],
        condition: "macular-degeneration",
    },
    Rule {
        keywords: &["retina", "detachment"],
        condition: "retinal-detachment",
    },
    Rule {
        keywords: &["cornea", "keratitis", "ulcer"],
        condition: "corneal-disease",
    },
    Rule {
        keywords: &["conjunctivitis", "pink_eye", "pink-eye"],
        condition: "conjunctivitis",
    },
    Rule {
        keywords: &["blepharitis", "eyelid", "lid_margin"],
        condition: "blepharitis",
    },
    Rule {
        keywords: &["chalazion", "stye", "hordeolum"],
        condition: "chalazion",
    },
    Rule {
        keywords: &["strabismus", "amblyopia", "lazy_eye", "lazy-eye"],
        condition: "strabismus",
    },
];

/// Filename token separators. Dots also separate the extension, which is
/// stripped before tokenization.
const SEPARATORS: &[char] = &['_', '-', ' ', '.'];

/// Trailing tokens that mark a manual re-export of an existing photo.
/// Stripped from titles so re-exports dedup against the original.
const REEXPORT_MARKERS: &[&str] = &["dup", "copy", "edit"];

/// Extract the category token: the substring before the first separator,
/// lowercased. For `keratoconus_cornea_01.jpg` this is `"keratoconus"`.
/// Filenames without any separator yield their whole stem.
pub fn category_token(filename: &str) -> String {
    let stem = strip_extension(filename);
    stem.split(SEPARATORS)
        .next()
        .unwrap_or(stem)
        .to_lowercase()
}

/// Classify a filename against [`RULES`]. Returns the condition slug of the
/// first matching rule, or `None` if no rule matches — unmatched filenames
/// are not an error, they simply appear in no gallery.
pub fn classify(filename: &str) -> Option<&'static str> {
    let haystack = filename.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| haystack.contains(kw)))
        .map(|rule| rule.condition)
}

/// Derive a display title from a filename.
///
/// Strips the extension, leading numeric tokens, the category token, and
/// trailing re-export markers; remaining tokens are title-cased and joined
/// with single spaces. Original casing of non-initial characters is kept
/// (`IOL_closeup` stays "IOL Closeup", not "Iol Closeup").
///
/// If stripping consumes every token (e.g. `cataract_01.jpg` is category +
/// number only), the numeric tokens are kept so the title is never empty
/// for a non-empty stem.
pub fn derive_title(filename: &str) -> String {
    let stem = strip_extension(filename);
    let tokens: Vec<&str> = stem.split(SEPARATORS).filter(|t| !t.is_empty()).collect();

    // The category label is the first non-numeric token, but only when it is
    // actually a classification keyword — "waiting_room_interior.jpg" has no
    // category and keeps its full title.
    let label = tokens
        .iter()
        .map(|t| t.to_lowercase())
        .find(|t| !is_numeric(t))
        .filter(|t| classify(t).is_some());

    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        let lower = token.to_lowercase();
        if is_numeric(token) || Some(&lower) == label.as_ref() {
            start = i + 1;
        } else {
            break;
        }
    }

    let mut end = tokens.len();
    while end > start && REEXPORT_MARKERS.contains(&tokens[end - 1].to_lowercase().as_str()) {
        end -= 1;
    }

    let mut kept: &[&str] = &tokens[start..end];
    if kept.is_empty() {
        // Category + numbers only: fall back to the numeric tokens.
        kept = &tokens[start.min(tokens.len().saturating_sub(1))..];
        if kept.is_empty() {
            kept = &tokens;
        }
    }

    kept.iter()
        .map(|t| title_case(t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a title for duplicate detection: lowercase, whitespace
/// collapsed and trimmed. Two photos whose titles normalize identically are
/// treated as the same photo re-exported under a near-identical name.
pub fn normalize_title(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(pos) if pos > 0 => &filename[..pos],
        _ => filename,
    }
}

fn is_numeric(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn title_case(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
