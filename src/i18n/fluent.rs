// SPDX-License-Identifier: MPL-2.0
//! Loading of the embedded `.ftl` translation files into Fluent bundles.

use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub type Bundle = FluentBundle<FluentResource>;

/// Parses one translation file into a bundle for `locale`.
///
/// Unicode isolation marks are disabled: notification text is plain and
/// must read back exactly as formatted.
pub fn build_bundle(locale: &LanguageIdentifier, source: String) -> Result<Bundle> {
    let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
        Error::I18n(format!("{locale}: {} syntax error(s)", errors.len()))
    })?;
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| Error::I18n(format!("{locale}: {} duplicate message(s)", errors.len())))?;
    Ok(bundle)
}

/// Loads every embedded `<locale>.ftl` file.
///
/// Files that fail to parse are reported on stderr and skipped.
pub fn load_embedded() -> Vec<(LanguageIdentifier, Bundle)> {
    let mut bundles = Vec::new();
    for file in Asset::iter() {
        let filename = file.as_ref();
        let Some(locale) = filename
            .strip_suffix(".ftl")
            .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
        else {
            continue;
        };
        let Some(content) = Asset::get(filename) else {
            continue;
        };
        let source = String::from_utf8_lossy(content.data.as_ref()).into_owned();
        match build_bundle(&locale, source) {
            Ok(bundle) => bundles.push((locale, bundle)),
            Err(err) => eprintln!("Skipping translation {filename}: {err}"),
        }
    }
    bundles.sort_by_key(|(locale, _)| locale.to_string());
    bundles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_files_all_parse() {
        let locales: Vec<String> = load_embedded()
            .into_iter()
            .map(|(locale, _)| locale.to_string())
            .collect();
        assert!(locales.contains(&"en-US".to_string()));
        assert!(locales.contains(&"bn-BD".to_string()));
    }

    #[test]
    fn broken_source_is_an_i18n_error() {
        let locale: LanguageIdentifier = "en-US".parse().unwrap();
        match build_bundle(&locale, "= no id".to_string()) {
            Err(err) => assert!(matches!(err, Error::I18n(_))),
            Ok(_) => panic!("broken source should not build"),
        }
    }
}
