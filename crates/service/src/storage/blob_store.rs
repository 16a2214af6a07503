use std::sync::Arc;

use base64::Engine;
use chrono::{DateTime, Utc};
use configs::{StorageBackend, StorageConfig};
use futures::TryStreamExt;
use object_store::{aws::AmazonS3Builder, local::LocalFileSystem, memory::InMemory, path::Path, ObjectStore, PutPayload};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::ServiceError;

pub const ALLOWED_CONTENT_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/webp",
    "image/svg+xml",
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

const DEFAULT_FOLDER: &str = "general";

/// Result of a successful upload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredObject {
    pub key: String,
    pub url: String,
    pub size: u64,
    pub content_type: String,
}

/// One listed object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectEntry {
    pub key: String,
    pub url: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
}

/// JSON upload body; `data` may be a bare base64 string or a data URL.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Base64Upload {
    #[serde(default)]
    pub filename: String,
    pub content_type: Option<String>,
    #[serde(default)]
    pub data: String,
    pub folder: Option<String>,
}

/// Blob storage over any `object_store` backend.
#[derive(Clone)]
pub struct BlobStore {
    store: Arc<dyn ObjectStore>,
    public_base_url: String,
    max_bytes: usize,
    local_root: Option<String>,
}

impl BlobStore {
    pub fn new(store: Arc<dyn ObjectStore>, public_base_url: &str, max_bytes: usize) -> Self {
        Self {
            store,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
            max_bytes,
            local_root: None,
        }
    }

    pub fn in_memory(public_base_url: &str, max_bytes: usize) -> Self {
        Self::new(Arc::new(InMemory::new()), public_base_url, max_bytes)
    }

    /// Build the backend named in `[storage]`. S3 credentials and endpoint
    /// come from the usual `AWS_*` environment variables.
    pub fn from_config(cfg: &StorageConfig) -> Result<Self, ServiceError> {
        match cfg.backend {
            StorageBackend::Local => {
                std::fs::create_dir_all(&cfg.local_root).map_err(|e| ServiceError::Storage(format!("create {}: {e}", cfg.local_root)))?;
                let fs = LocalFileSystem::new_with_prefix(&cfg.local_root)?;
                let mut store = Self::new(Arc::new(fs), &cfg.public_base_url, cfg.max_upload_bytes);
                store.local_root = Some(cfg.local_root.clone());
                Ok(store)
            }
            StorageBackend::S3 => {
                let bucket = cfg
                    .bucket
                    .as_deref()
                    .ok_or_else(|| ServiceError::Storage("s3 backend requires a bucket".into()))?;
                let s3 = AmazonS3Builder::from_env().with_bucket_name(bucket).build()?;
                Ok(Self::new(Arc::new(s3), &cfg.public_base_url, cfg.max_upload_bytes))
            }
            StorageBackend::Memory => Ok(Self::in_memory(&cfg.public_base_url, cfg.max_upload_bytes)),
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Filesystem root when the local backend is in use (served at the public base URL).
    pub fn local_root(&self) -> Option<&str> {
        self.local_root.as_deref()
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    fn url_for(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }

    /// Store `bytes` under `<folder>/<uuid>-<filename>`.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn put(&self, folder: Option<&str>, filename: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Result<StoredObject, ServiceError> {
        if bytes.is_empty() {
            return Err(ServiceError::Validation("file is empty".into()));
        }
        if bytes.len() > self.max_bytes {
            return Err(ServiceError::Validation(format!("file exceeds {} bytes", self.max_bytes)));
        }
        let content_type = resolve_content_type(content_type, filename)?;
        let key = format!("{}/{}-{}", sanitize_folder(folder)?, Uuid::new_v4(), sanitize_filename(filename));
        let size = bytes.len() as u64;
        self.store.put(&Path::from(key.clone()), PutPayload::from(bytes)).await?;
        info!(%key, size, %content_type, "blob stored");
        Ok(StoredObject { url: self.url_for(&key), key, size, content_type })
    }

    /// Decode a base64 body (optionally a `data:<mime>;base64,` URL) and store it.
    pub async fn put_base64(&self, upload: Base64Upload) -> Result<StoredObject, ServiceError> {
        if upload.filename.trim().is_empty() {
            return Err(ServiceError::Validation("filename is required".into()));
        }
        let (mime, bytes) = decode_data(&upload.data)?;
        let content_type = upload.content_type.filter(|c| !c.trim().is_empty()).or(mime);
        self.put(upload.folder.as_deref(), &upload.filename, content_type.as_deref(), bytes).await
    }

    /// Remove an object. Missing objects are not an error.
    #[instrument(skip(self))]
    pub async fn delete(&self, key: &str) -> Result<(), ServiceError> {
        let path = parse_key(key)?;
        match self.store.delete(&path).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn list(&self, prefix: Option<&str>) -> Result<Vec<ObjectEntry>, ServiceError> {
        let prefix = match prefix.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) => Some(parse_key(p)?),
            None => None,
        };
        let metas: Vec<_> = self.store.list(prefix.as_ref()).try_collect().await?;
        let mut entries: Vec<ObjectEntry> = metas
            .into_iter()
            .map(|m| {
                let key = m.location.to_string();
                ObjectEntry { url: self.url_for(&key), key, size: m.size as u64, last_modified: m.last_modified }
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        Ok(entries)
    }
}

fn parse_key(key: &str) -> Result<Path, ServiceError> {
    let key = key.trim().trim_start_matches('/');
    if key.is_empty() || key.split('/').any(|seg| seg == ".." || seg == ".") {
        return Err(ServiceError::Validation(format!("invalid key: {key}")));
    }
    Path::parse(key).map_err(|e| ServiceError::Validation(e.to_string()))
}

/// Folder path of `[a-z0-9_-]` segments; defaults to `general`.
pub fn sanitize_folder(folder: Option<&str>) -> Result<String, ServiceError> {
    let raw = folder.map(str::trim).filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FOLDER);
    let mut parts = Vec::new();
    for seg in raw.trim_matches('/').split('/') {
        if seg == ".." {
            return Err(ServiceError::Validation("folder may not contain '..'".into()));
        }
        let clean: String = seg
            .to_ascii_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
            .collect();
        if !clean.is_empty() {
            parts.push(clean);
        }
    }
    if parts.is_empty() {
        return Ok(DEFAULT_FOLDER.to_string());
    }
    Ok(parts.join("/"))
}

pub fn sanitize_filename(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let mut out: String = base
        .trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '.' || c == '_' || c == '-' { c } else { '-' })
        .collect();
    out = out.trim_matches(|c| c == '.' || c == '-').to_string();
    if out.len() > 100 {
        out = out[out.len() - 100..].to_string();
    }
    if out.is_empty() {
        "file".to_string()
    } else {
        out
    }
}

/// Content type from the extension, for clients that send none.
pub fn guess_content_type(filename: &str) -> Option<&'static str> {
    let ext = filename.rsplit_once('.')?.1.to_ascii_lowercase();
    Some(match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        _ => return None,
    })
}

fn resolve_content_type(declared: Option<&str>, filename: &str) -> Result<String, ServiceError> {
    let declared = declared
        .map(|c| c.split(';').next().unwrap_or(c).trim().to_ascii_lowercase())
        .filter(|c| !c.is_empty() && c != "application/octet-stream");
    let ct = declared
        .or_else(|| guess_content_type(filename).map(str::to_string))
        .ok_or_else(|| ServiceError::Validation("unknown content type".into()))?;
    if !ALLOWED_CONTENT_TYPES.contains(&ct.as_str()) {
        return Err(ServiceError::Validation(format!("content type {ct} is not allowed")));
    }
    Ok(ct)
}

/// Split an optional `data:<mime>;base64,` prefix off and decode the rest.
pub fn decode_data(data: &str) -> Result<(Option<String>, Vec<u8>), ServiceError> {
    let data = data.trim();
    let (mime, payload) = match data.strip_prefix("data:") {
        Some(rest) => {
            let (header, body) = rest
                .split_once(',')
                .ok_or_else(|| ServiceError::Validation("malformed data URL".into()))?;
            let mime = header.strip_suffix(";base64").unwrap_or(header).trim();
            ((!mime.is_empty()).then(|| mime.to_string()), body)
        }
        None => (None, data),
    };
    if payload.is_empty() {
        return Err(ServiceError::Validation("data is required".into()));
    }
    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(&compact)
        .or_else(|_| base64::engine::general_purpose::STANDARD_NO_PAD.decode(&compact))
        .map_err(|e| ServiceError::Validation(format!("invalid base64: {e}")))?;
    Ok((mime, bytes))
}
