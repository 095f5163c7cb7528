/// Cleans a raw driver name such as `"Max VerstappenVER"` into `"Max Verstappen"`.
///
/// Result pages glue the three-letter broadcast code onto the display name. The last
/// three characters are dropped when they are all uppercase letters and the character
/// right before them is a letter or whitespace. Anything else comes back trimmed but
/// otherwise untouched.
///
/// The heuristic is lossy: a four-character all-caps token such as `"AVER"` is cut
/// down to `"A"`.
pub fn normalize_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let chars: Vec<char> = trimmed.chars().collect();

    if chars.len() > 3 {
        let (head, code) = chars.split_at(chars.len() - 3);
        let is_code = code.iter().all(|c| c.is_uppercase());
        let boundary = head
            .last()
            .map(|c| c.is_alphabetic() || c.is_whitespace())
            .unwrap_or(false);

        if is_code && boundary {
            return head.iter().collect::<String>().trim().to_string();
        }
    }

    trimmed.to_string()
}
