use async_recursion::async_recursion;
use std::io;
use std::path::{Path, PathBuf};
use tokio::fs;

#[async_recursion]
pub async fn get_all_files(dir_path: &Path) -> io::Result<Vec<PathBuf>> {
    let mut dir = fs::read_dir(dir_path).await?;
    let mut files = Vec::new();

    while let Some(entry) = dir.next_entry().await? {
        let path = entry.path();

        if path.is_dir() {
            files.append(&mut get_all_files(&path).await?);
        } else {
            files.push(path);
        }
    }

    Ok(files)
}

pub async fn find_cue_files(dir_path: &Path) -> io::Result<Vec<PathBuf>> {
    let files = get_all_files(dir_path).await?;

    Ok(files
        .into_iter()
        .filter(|file| {
            file.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case("cue"))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn finds_cue_files_recursively_and_case_insensitively() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.cue"), "").unwrap();
        std::fs::write(dir.path().join("a.bin"), "").unwrap();

        let nested = dir.path().join("nested").join("deeper");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("b.CUE"), "").unwrap();
        std::fs::write(nested.join("readme.txt"), "").unwrap();

        let mut found = find_cue_files(dir.path()).await.unwrap();
        found.sort();

        assert_eq!(found, vec![dir.path().join("a.cue"), nested.join("b.CUE")]);
    }
}
