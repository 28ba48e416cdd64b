use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::InvalidQuestion;

use super::QuestionBank;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{} contains no questions", path.display())]
    Empty { path: PathBuf },
    #[error(transparent)]
    Invalid(#[from] InvalidQuestion),
}

/// Load a question bank from a JSON file shaped like
/// `{"easy": [...], "medium": [...], "hard": [...]}`.
///
/// A pool that is missing from the file stays empty; starting a round on it
/// reports that no questions are available.
pub fn load_bank_from_json<P: AsRef<Path>>(path: P) -> Result<QuestionBank, LoadError> {
    let path = path.as_ref();

    let json_content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let bank: QuestionBank =
        serde_json::from_str(&json_content).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    if crate::models::Difficulty::ALL
        .iter()
        .all(|&difficulty| bank.pool(difficulty).is_empty())
    {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    bank.validate()?;
    Ok(bank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Difficulty;

    fn write_temp(contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("bank-{}.json", uuid::Uuid::new_v4()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_valid_bank() {
        let path = write_temp(
            r#"{"medium": [{"prompt": "HTTP default port?", "options": ["21","80","443","8080"], "correct_answer": "80"}]}"#,
        );
        let bank = load_bank_from_json(&path).unwrap();
        assert_eq!(bank.pool(Difficulty::Medium)[0].correct_answer, "80");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_rejects_empty_and_invalid() {
        let empty = write_temp(r#"{"easy": []}"#);
        assert!(matches!(load_bank_from_json(&empty), Err(LoadError::Empty { .. })));
        fs::remove_file(empty).unwrap();

        let invalid = write_temp(
            r#"{"easy": [{"prompt": "p", "options": ["a","b","c","d"], "correct_answer": "z"}]}"#,
        );
        assert!(matches!(load_bank_from_json(&invalid), Err(LoadError::Invalid(_))));
        fs::remove_file(invalid).unwrap();
    }

    #[test]
    fn test_rejects_repeated_prompt() {
        let question = r#"{"prompt": "Same?", "options": ["a","b","c","d"], "correct_answer": "a"}"#;
        let path = write_temp(&format!(r#"{{"easy": [{question}, {question}, {question}]}}"#));

        let err = load_bank_from_json(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Invalid(InvalidQuestion::DuplicatePrompt { ref prompt, difficulty: Difficulty::Easy })
                if prompt == "Same?"
        ));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join(format!("absent-{}.json", uuid::Uuid::new_v4()));
        assert!(matches!(load_bank_from_json(&path), Err(LoadError::Read { .. })));
    }
}
