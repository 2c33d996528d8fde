use crate::domain::errors::CardError;
use crate::domain::models::{CardFile, CardType, Layout};
use std::path::{Path, PathBuf};

/// Lazily yields one category's card files, school by school.
pub struct CardWalk {
    layout: Layout,
    card_type: CardType,
    schools: std::vec::IntoIter<PathBuf>,
    pending: std::vec::IntoIter<CardFile>,
}

pub fn walk(root: &Path, layout: &Layout, card_type: CardType) -> Result<CardWalk, CardError> {
    if !root.is_dir() {
        return Err(CardError::RootMissing(root.to_path_buf()));
    }
    let schools = sorted_entries(root)
        .map_err(|source| CardError::Read {
            path: root.to_path_buf(),
            source,
        })?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect::<Vec<_>>();
    Ok(CardWalk {
        layout: layout.clone(),
        card_type,
        schools: schools.into_iter(),
        pending: Vec::new().into_iter(),
    })
}

impl CardWalk {
    fn files_in_school(&self, school: &Path) -> Vec<CardFile> {
        let school_name = school
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let category = self.layout.dir_for(self.card_type);
        let dir = school.join(category);
        if !dir.is_dir() {
            return Vec::new();
        }
        let entries = match sorted_entries(&dir) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "skipping unreadable category");
                return Vec::new();
            }
        };
        let mut out = Vec::new();
        for path in entries {
            if !path.is_file() || !has_extension(&path, &self.layout.extension) {
                continue;
            }
            let Some(identifier) = path.file_stem().map(|s| s.to_string_lossy().to_string())
            else {
                continue;
            };
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            out.push(CardFile {
                display: format!("{}/{}/{}", school_name, category, file_name),
                path,
                identifier,
                card_type: self.card_type,
            });
        }
        out
    }
}

impl Iterator for CardWalk {
    type Item = CardFile;

    fn next(&mut self) -> Option<CardFile> {
        loop {
            if let Some(f) = self.pending.next() {
                return Some(f);
            }
            let school = self.schools.next()?;
            self.pending = self.files_in_school(&school).into_iter();
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().map(|e| e == ext).unwrap_or(false)
}

fn sorted_entries(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        out.push(entry?.path());
    }
    out.sort();
    Ok(out)
}
