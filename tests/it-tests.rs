use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.json");
    std::fs::write(
        &path,
        r#"{ "allowed_users": { "user1": "password1" }, "error_log": null }"#,
    )
    .expect("Failed to write config");
    path
}

fn cli(config: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_imgtext-cli"));
    command.arg("--config").arg(config);
    command
}

mod extract_tests {
    use super::*;

    #[test]
    fn test_bad_password_yields_null() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);
        let image = dir.path().join("page.png");
        image::DynamicImage::new_rgb8(8, 8).save(&image).unwrap();

        let output = cli(&config)
            .args(["extract", "--user", "user1", "--password", "password2", "--json", "--image"])
            .arg(&image)
            .output()
            .expect("Failed to run imgtext-cli");

        assert!(!output.status.success());
        assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Authentication failed for user: user1"));
    }

    #[test]
    fn test_unsupported_engine_yields_null() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);

        let output = cli(&config)
            .args([
                "extract", "--user", "user1", "--password", "password1", "--engine", "paddle",
                "--json", "--image", "img.png",
            ])
            .output()
            .expect("Failed to run imgtext-cli");

        assert!(!output.status.success());
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Unsupported OCR engine: paddle"));
    }

    #[test]
    fn test_invalid_roi_is_rejected_by_parser() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);

        let output = cli(&config)
            .args([
                "extract", "--user", "user1", "--password", "password1", "--roi", "1,2,3",
                "--image", "img.png",
            ])
            .output()
            .expect("Failed to run imgtext-cli");

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("x,y,width,height"));
    }
}

mod batch_tests {
    use super::*;

    #[test]
    fn test_batch_keeps_every_key() {
        let dir = TempDir::new().unwrap();
        let config = write_config(&dir);

        let output = cli(&config)
            .args([
                "batch", "--user", "user1", "--password", "password1", "--json", "--images",
                "a.png", "b.png",
            ])
            .output()
            .expect("Failed to run imgtext-cli");

        assert!(!output.status.success());
        let json: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
        let map = json.as_object().expect("batch output should be an object");
        assert_eq!(map.len(), 2);
        assert!(map["a.png"].is_null());
        assert!(map["b.png"].is_null());
    }

    #[test]
    fn test_missing_config_fails_fast() {
        let output = Command::new(env!("CARGO_BIN_EXE_imgtext-cli"))
            .args(["--config", "no-such-config.json", "batch", "--user", "u", "--password", "p"])
            .args(["--images", "a.png"])
            .output()
            .expect("Failed to run imgtext-cli");

        assert!(!output.status.success());
        assert!(String::from_utf8_lossy(&output.stderr).contains("no-such-config.json"));
    }
}
