use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod add_gl_quotes;
mod convert_gl_quotes;
mod init;
mod resolve;

const BIN_NAME: &str = "quote-align";

/// Titus 1:1 and 1:4 in Greek, the ULT (aligned) and the UST (partly aligned).
pub const TOKENS: &str = r#"{
  "el-x-koine_ugnt": {
    "TIT": {
      "1:1": [
        {"subType": "wordLike", "payload": "Παῦλος"},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "δοῦλος"},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "Θεοῦ"},
        {"subType": "punctuation", "payload": ","}
      ],
      "1:4": [
        {"subType": "wordLike", "payload": "χάρις"},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "καὶ"},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "εἰρήνη"}
      ]
    }
  },
  "en_ult": {
    "TIT": {
      "1:1": [
        {"subType": "wordLike", "payload": "Paul", "scopes": ["attribute/milestone/zaln/x-align/0/Παῦλος:1:1"]},
        {"subType": "punctuation", "payload": ","},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "a"},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "servant", "scopes": ["attribute/milestone/zaln/x-align/0/δοῦλος:1:1"]},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "of", "scopes": ["attribute/milestone/zaln/x-align/0/Θεοῦ:1:1"]},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "God", "scopes": ["attribute/milestone/zaln/x-align/0/Θεοῦ:1:1"]},
        {"subType": "punctuation", "payload": ","}
      ],
      "1:4": [
        {"subType": "wordLike", "payload": "Grace", "scopes": ["attribute/milestone/zaln/x-align/0/χάρις:1:1"]},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "and", "scopes": ["attribute/milestone/zaln/x-align/0/καὶ:1:1"]},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "peace", "scopes": ["attribute/milestone/zaln/x-align/0/εἰρήνη:1:1"]}
      ]
    }
  },
  "en_ust": {
    "TIT": {
      "1:1": [
        {"subType": "wordLike", "payload": "I"},
        {"subType": "lineSpace", "payload": " "},
        {"subType": "wordLike", "payload": "Paul", "scopes": ["attribute/milestone/zaln/x-align/0/Παῦλος:1:1"]}
      ],
      "1:4": [
        {"subType": "wordLike", "payload": "May"}
      ]
    }
  }
}"#;

pub const NOTES_HEADER: &str = "Reference\tID\tTags\tSupportReference\tQuote\tOccurrence\tNote";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the config search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with `tokens.json` holding [`TOKENS`].
    pub fn with_tokens() -> Result<Self> {
        let test = Self::new()?;
        test.write_file("tokens.json", TOKENS)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    /// Write a note table with [`NOTES_HEADER`] and the given rows.
    pub fn write_notes(&self, path: &str, rows: &[&str]) -> Result<()> {
        let mut content = NOTES_HEADER.to_string();
        for row in rows {
            content.push('\n');
            content.push_str(row);
        }
        content.push('\n');
        self.write_file(path, &content)
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn resolve_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve");
        cmd
    }

    pub fn add_gl_quotes_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("add-gl-quotes");
        cmd
    }

    pub fn convert_gl_quotes_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("convert-gl-quotes");
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}
