/// Location of an uploaded object
#[derive (Debug, Clone, PartialEq, Eq)]
pub struct Uri {
    pub bucket: String,
    pub key: String,
}

impl Uri {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Uri {
        Uri { bucket: bucket.into(), key: key.into() }
    }
    /// Key under which a company's file is stored: `company/name`
    pub fn for_company(bucket: &str, company: &str, name: &str) -> Uri {
        Uri::new(bucket, format!("{company}/{name}"))
    }
}

impl std::fmt::Display for Uri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "s3://{}/{}", self.bucket, self.key)
    }
}

#[test]
fn test_company_key() {
    let uri = Uri::for_company("bucket1", "acme", "logo.png");
    assert_eq!(uri.key, "acme/logo.png");
    assert_eq!(uri.to_string(), "s3://bucket1/acme/logo.png");
}
