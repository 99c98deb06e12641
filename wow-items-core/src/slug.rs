//! Slug generation for item names.

/// Separator placed between the alphanumeric runs of a slug.
pub const SEPARATOR: char = '-';

/// Normalize `text` into a `-`-delimited identifier.
///
/// Every run of non-alphanumeric characters (whitespace, punctuation,
/// symbols) collapses into a single `-`, and the result never starts or ends
/// with one. Unicode letters and digits are kept. When `lower` is true the
/// result is lowercased.
///
/// Text with no alphanumeric characters produces an empty slug.
///
/// # Examples
///
/// ```
/// use wow_items_core::slugify;
///
/// assert_eq!(slugify("Bloodfang Hood", true), "bloodfang-hood");
/// assert_eq!(slugify("Kel'Thuzad's Phylactery", true), "kel-thuzad-s-phylactery");
/// assert_eq!(slugify("Bloodfang Hood", false), "Bloodfang-Hood");
/// assert_eq!(slugify("  ", true), "");
/// ```
pub fn slugify(text: &str, lower: bool) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_separator = false;

    for ch in text.trim().chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            if lower {
                slug.extend(ch.to_lowercase());
            } else {
                slug.push(ch);
            }
        } else {
            pending_separator = true;
        }
    }

    slug
}
