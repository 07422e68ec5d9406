#[cfg(test)]
mod tests {
    use anyhow::Result;
    use nurl::{Url, UrlError};

    #[test]
    fn test_parse_google() -> Result<()> {
        let url = nurl::create_from_string("http://www.google.com")?;

        assert!(url.is_absolute());
        assert_eq!(url.port(), Some(80));
        assert_eq!(url.pathname(), "/");
        assert_eq!(url.subdomains(), vec!["www", "google", "com"]);
        assert_eq!(url.to_string(), "http://www.google.com");

        Ok(())
    }

    #[test]
    fn test_getters_on_full_url() -> Result<()> {
        let url = nurl::parse("http://www.google.com/path/to/file?q=testing&nocache#something")?;

        assert_eq!(url.path_segments(), vec!["path", "to", "file"]);
        assert_eq!(url.path_segment(1).as_deref(), Some("to"));
        assert!(url.has_query_param("nocache"));
        assert_eq!(url.query_param("q").as_deref(), Some("testing"));
        assert_eq!(url.query_params().len(), 2);
        assert_eq!(url.hash().as_deref(), Some("#something"));
        assert_eq!(url.href(), "http://www.google.com/path/to/file?q=testing&nocache#something");

        Ok(())
    }

    #[test]
    fn test_rewrite_pipeline() -> Result<()> {
        let url: Url = "HTTPS://Shop.Example.com/Items/42?Sort=asc".parse()?;

        let rewritten = url
            .set_subdomain(0, "api")
            .set_path_segment(2, "reviews")?
            .set_query_param("page", "2 of 3");

        assert_eq!(
            rewritten.to_string(),
            "https://api.example.com/items/42/reviews?sort=asc&page=2%20of%203"
        );
        assert_eq!(rewritten.port(), Some(443));
        assert_eq!(url.to_string(), "https://shop.example.com/items/42?sort=asc");

        Ok(())
    }

    #[test]
    fn test_path_index_past_end() -> Result<()> {
        let url = nurl::parse("/path/to/file")?;

        let err = url.set_path_segment(4, "x").unwrap_err();
        assert_eq!(err, UrlError::InvalidPathIndex { index: 4, segments: 3 });
        assert!(err.to_string().contains("invalid path index: 4"));

        Ok(())
    }

    #[test]
    fn test_merge_relative_into_absolute() -> Result<()> {
        let base = nurl::parse("http://www.google.com")?;

        assert_eq!(
            base.merge_with(&nurl::parse("/testing")?).to_string(),
            "http://www.google.com/testing"
        );
        assert_eq!(
            base.merge_with(&nurl::parse("http://www.example.com/testing?q=boom")?)
                .to_string(),
            "http://www.google.com/testing?q=boom"
        );
        assert!(matches!(
            base.try_merge_with(&42u32),
            Err(UrlError::InvalidMergeArgument { .. })
        ));

        Ok(())
    }

    #[test]
    fn test_invalid_input() {
        let err = nurl::parse("http://exa mple.com/").unwrap_err();
        assert!(matches!(err, UrlError::InvalidUrl { .. }));
        assert!(err.to_string().starts_with("invalid URL 'http://exa mple.com/'"));
    }

    #[test]
    fn test_components_json() -> Result<()> {
        let url = nurl::parse("ftp://user:pw@files.example.com:2121/pub")?;
        let json = serde_json::to_value(url.components())?;

        assert_eq!(json["scheme"], "ftp");
        assert_eq!(json["auth"], "user:pw");
        assert_eq!(json["port"], 2121);
        assert_eq!(json["path_segments"][0], "pub");
        assert_eq!(json["href"], "ftp://user:pw@files.example.com:2121/pub");

        Ok(())
    }

    #[test]
    fn test_shared_across_threads() -> Result<()> {
        let url = std::sync::Arc::new(nurl::parse("http://www.example.com/a")?);
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let url = std::sync::Arc::clone(&url);
                std::thread::spawn(move || url.set_query_param("n", &i.to_string()).to_string())
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let href = handle.join().expect("worker panicked");
            assert_eq!(href, format!("http://www.example.com/a?n={}", i));
        }
        assert_eq!(url.search(), None);

        Ok(())
    }
}
