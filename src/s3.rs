use aws_types::region::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_smithy_types::date_time::Format;
use futures::stream::Stream;

use crate::arguments::Arguments;
use crate::shared_options::SharedOptions;

mod uri;

pub use uri::Uri;

const FALLBACK_REGION: &str = "eu-west-1";

/// Operations the shell needs from an object store
#[allow(async_fn_in_trait)]
pub trait Storage {
    async fn list_buckets(&self) -> Result<Vec<String>, Error>;
    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectEntry>, Error>;
    /// Upload the local file at `path` to `to`, returning where it landed
    async fn upload(&self, path: &std::path::Path, to: &Uri) -> Result<Uri, Error>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectEntry {
    pub key: String,
    /// RFC 3339
    pub last_modified: Option<String>,
}

pub struct Client {
    client: aws_sdk_s3::Client,
    acl: Option<ObjectCannedAcl>,
    verbose: bool,
}

pub(crate) async fn init(args: &Arguments) -> Client {
    let provided_region = args.region.clone().map(Region::new);
    let region_provider = RegionProviderChain::first_try(provided_region)
        .or_default_provider()
        .or_else(FALLBACK_REGION);
    let mut loader = aws_config::from_env().region(region_provider);
    // Without both keys the default chain applies, and reports on first use
    if let (Some(id), Some(secret)) = (&args.access_key_id, &args.secret_access_key) {
        loader = loader.credentials_provider(Credentials::new(id, secret, None, None, "shell-environment"));
    }
    if let Some(endpoint) = &args.endpoint {
        loader = loader.endpoint_url(endpoint.to_string());
    }
    if let Some(profile) = &args.profile {
        loader = loader.profile_name(profile);
    }
    let config = loader.load().await;
    let s3_config = aws_sdk_s3::config::Builder::from(&config)
        .force_path_style(args.endpoint.is_some())
        .build();
    Client::new(aws_sdk_s3::Client::from_conf(s3_config), &args.shared)
}

#[derive (thiserror::Error, Debug)]
pub enum Error {
    #[error("S3: {}", .source)]
    S3 {
        #[from]
        source: aws_sdk_s3::Error,
    },
    #[error("accessing local file: {}", .0)]
    File(Box<dyn std::error::Error + Send + Sync + 'static>),
}

/// Stream the local file at `path` as an object body
pub async fn open_body(path: &std::path::Path) -> Result<ByteStream, Error> {
    ByteStream::from_path(path)
        .await
        .map_err(|e| Error::File(e.into()))
}

impl Client {
    pub fn new(client: aws_sdk_s3::Client, opts: &SharedOptions) -> Client {
        Client {
            client,
            acl: opts.acl.as_deref().map(ObjectCannedAcl::from),
            verbose: opts.verbose,
        }
    }
}

impl Storage for Client {
    async fn list_buckets(&self) -> Result<Vec<String>, Error> {
        let output = self.client.list_buckets()
            .send()
            .await
            .map_err(|e| -> aws_sdk_s3::Error { e.into() } )?;
        let names = output.buckets()
            .unwrap_or_default()
            .iter()
            .filter_map(|bucket| bucket.name())
            .map(str::to_owned)
            .collect();
        Ok(names)
    }
    async fn list_objects(&self, bucket: &str) -> Result<Vec<ObjectEntry>, Error> {
        if self.verbose {
            eprintln!("listing s3://{bucket}/");
        }
        let output = self.client.list_objects_v2()
            .bucket(bucket)
            .send()
            .await
            .map_err(|e| -> aws_sdk_s3::Error { e.into() } )?;
        let entries = output.contents()
            .unwrap_or_default()
            .iter()
            .filter_map(|object| {
                let key = object.key()?.to_owned();
                let last_modified = object.last_modified()
                    .and_then(|date| date.fmt(Format::DateTime).ok());
                Some(ObjectEntry { key, last_modified })
            })
            .collect();
        Ok(entries)
    }
    async fn upload(&self, path: &std::path::Path, to: &Uri) -> Result<Uri, Error> {
        let stream = open_body(path).await?;
        let (_, size_hint) = stream.size_hint();
        if self.verbose {
            let path_printable = path.to_string_lossy();
            match size_hint {
                Some(size) => eprintln!("uploading '{path_printable}' [{size} bytes] to {to}"),
                None => eprintln!("uploading '{path_printable}' to {to}"),
            };
        }
        self.client.put_object()
            .bucket(to.bucket.clone())
            .key(to.key.clone())
            .set_acl(self.acl.clone())
            .body(stream)
            .send()
            .await
            .map_err(|e| -> aws_sdk_s3::Error { e.into() } )?;
        Ok(to.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_local_file() {
        let missing = std::env::temp_dir().join("s3shell-test-does-not-exist.png");
        let result = open_body(&missing).await;
        assert!(matches!(result, Err(Error::File(_))));
    }

    #[tokio::test]
    async fn test_local_file_body() {
        let path = std::env::temp_dir().join("s3shell-test-body.txt");
        tokio::fs::write(&path, b"hello").await.unwrap();
        let stream = open_body(&path).await.unwrap();
        assert_eq!(stream.size_hint().1, Some(5));
        tokio::fs::remove_file(&path).await.unwrap();
    }
}
