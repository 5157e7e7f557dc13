use anyhow::Result;
use std::path::PathBuf;

pub async fn run(path: PathBuf, name: Option<String>) -> Result<()> {
    let site_name = name.unwrap_or_else(|| "Training Institute".to_string());

    std::fs::create_dir_all(&path)?;
    std::fs::create_dir_all(path.join("data"))?;
    std::fs::create_dir_all(path.join("storage/images"))?;

    let config = format!(
        r#"[site]
name = "{}"
url = "http://localhost:8000"

[server]
host = "127.0.0.1"
port = 8000

[database]
path = "data/campus.db"

[media]
upload_dir = "storage"
max_upload_bytes = 10485760
"#,
        site_name
    );

    std::fs::write(path.join("campus.toml"), config)?;

    tracing::info!("Created new site at {:?}", path);
    tracing::info!("Run 'campus migrate' to set up the database");
    tracing::info!("Run 'campus token create --name admin' to mint an API token");
    tracing::info!("Run 'campus serve' to start the server");

    Ok(())
}
