/// File extension for a Codeforces language label. Unknown labels get `.txt`.
pub fn extension(language: &str) -> &'static str {
    match language {
        "GNU C++" | "GNU C++11" | "MS C++" => ".cpp",
        "GNU C" | "GNU C11" => ".c",
        "Java 7" | "Java 8" => ".java",
        "Python 3" | "Python 2" => ".py",
        "Ruby" => ".rb",
        _ => ".txt",
    }
}

#[cfg(test)]
mod tests {
    use super::extension;

    #[test]
    fn known_labels() {
        let table = [
            ("GNU C++", ".cpp"),
            ("GNU C++11", ".cpp"),
            ("MS C++", ".cpp"),
            ("GNU C", ".c"),
            ("GNU C11", ".c"),
            ("Java 7", ".java"),
            ("Java 8", ".java"),
            ("Python 3", ".py"),
            ("Python 2", ".py"),
            ("Ruby", ".rb"),
        ];
        for (label, ext) in table.iter() {
            assert_eq!(extension(label), *ext, "label {}", label);
        }
    }

    #[test]
    fn unknown_labels_are_text() {
        for label in ["GNU C++17", "ruby", "Python 3 ", "Rust 2021", ""].iter() {
            assert_eq!(extension(label), ".txt", "label {:?}", label);
        }
    }
}
