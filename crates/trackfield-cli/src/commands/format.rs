//! Format command implementation.

use anyhow::Result;

use crate::config::Config;

/// Run the format command
pub fn run(config: &Config, kind: Option<&str>, magnitude: u64) -> Result<()> {
    println!("{}", render(config, kind, magnitude)?);
    Ok(())
}

fn render(config: &Config, kind: Option<&str>, magnitude: u64) -> Result<String> {
    let kind = config.resolve_kind(kind)?;
    Ok(trackfield_core::format(kind, magnitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackfield_core::Error;

    #[test]
    fn test_render() {
        let config = Config::default();
        assert_eq!(render(&config, Some("TIME"), 732051).unwrap(), "02:02:00.51");
        assert_eq!(render(&config, Some("DISTANCE"), 150).unwrap(), "1.50");
    }

    #[test]
    fn test_render_beyond_signed_range() {
        let config = Config::default();
        assert_eq!(
            render(&config, Some("POINTS"), u64::MAX).unwrap(),
            u64::MAX.to_string()
        );
        assert_eq!(
            render(&config, Some("DISTANCE"), u64::MAX).unwrap(),
            "184467440737095516.15"
        );
    }

    #[test]
    fn test_render_without_kind() {
        let err = render(&Config::default(), None, 5).unwrap_err();
        assert!(err.downcast_ref::<Error>().unwrap().is_invalid_kind());
    }
}
