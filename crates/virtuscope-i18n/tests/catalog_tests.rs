use rstest::rstest;
use virtuscope_i18n::Catalog;
use virtuscope_lang::LanguageCode;

#[test]
fn every_key_resolves_to_a_non_empty_string_in_every_language() {
    let catalog = Catalog::embedded();
    for language in LanguageCode::all() {
        for key in catalog.keys() {
            let value = catalog.resolve(language, key);
            assert!(
                !value.is_empty(),
                "'{}' resolved to an empty string in '{}'",
                key,
                language
            );
        }
    }
}

#[test]
fn missing_translations_fall_back_to_english() {
    let catalog = Catalog::embedded();
    for language in LanguageCode::all() {
        for key in catalog.missing_keys(language) {
            assert_eq!(
                catalog.resolve(language, key),
                catalog.lookup(LanguageCode::En, key).unwrap()
            );
        }
    }
}

#[test]
fn unknown_keys_resolve_to_themselves() {
    let catalog = Catalog::embedded();
    for language in LanguageCode::all() {
        assert_eq!(
            catalog.resolve(language, "does.not.exist"),
            "does.not.exist"
        );
    }
}

#[test]
fn no_locale_defines_keys_english_lacks() {
    let catalog = Catalog::embedded();
    for language in LanguageCode::all() {
        assert!(
            catalog.orphan_keys(language).is_empty(),
            "'{}' has keys missing from English: {:?}",
            language,
            catalog.orphan_keys(language)
        );
    }
}

#[test]
fn english_is_complete() {
    assert!(Catalog::embedded().coverage(LanguageCode::En).is_complete());
}

#[rstest]
#[case(LanguageCode::En, "contact", "Contact")]
#[case(LanguageCode::Lg, "contact", "Tukwatibweko")]
#[case(LanguageCode::Fr, "about", "À Propos")]
#[case(LanguageCode::Sw, "services", "Huduma")]
#[case(LanguageCode::Rw, "contact.form.sending", "Kohereza...")]
#[case(LanguageCode::Lg, "about.title", "About Us")]
#[case(LanguageCode::Rw, "contact.form.error.name", "Name must be at least 2 characters.")]
#[case(LanguageCode::Fr, "contact.form.error.name", "Le nom doit contenir au moins 2 caractères.")]
fn resolves_site_strings(
    #[case] language: LanguageCode,
    #[case] key: &str,
    #[case] expected: &str,
) {
    assert_eq!(Catalog::embedded().resolve(language, key), expected);
}
