//! Corpus Module Tests
//!
//! Validates the resolver's lookup logic against a small hand-built corpus.
//!
//! ## Test Scopes
//! - **Book matching**: Precedence order (exact abbreviation > exact name >
//!   substring), case-insensitivity, source-order tie-breaking.
//! - **Chapter/Verse addressing**: 1-based numbering, out-of-range handling,
//!   the empty-verse policy.
//! - **Corpus**: Translation availability and load-order listing.

#[cfg(test)]
mod tests {
    use crate::corpus::resolver::Resolver;
    use crate::corpus::types::{Book, Corpus, LookupError, Translation};

    fn book(name: &str, abbrev: &str, chapters: Vec<Vec<&str>>) -> Book {
        Book {
            name: name.to_string(),
            abbrev: abbrev.to_string(),
            chapters: chapters
                .into_iter()
                .map(|c| c.into_iter().map(|v| v.to_string()).collect())
                .collect(),
        }
    }

    /// A miniature "acf" translation with enough books to exercise every
    /// precedence level of the matcher.
    fn sample_corpus() -> Corpus {
        let mut corpus = Corpus::new();
        corpus.insert(Translation {
            code: "acf".to_string(),
            books: vec![
                book(
                    "Gênesis",
                    "gn",
                    vec![
                        vec!["No princípio criou Deus os céus e a terra.", "A terra era sem forma e vazia."],
                        vec!["Assim os céus e a terra foram acabados."],
                    ],
                ),
                book("Jonas", "jn", vec![vec!["Veio a palavra do Senhor a Jonas."]]),
                book("João", "jo", vec![vec!["No princípio era o Verbo.", ""]]),
                book("1 João", "1jo", vec![vec!["O que era desde o princípio."]]),
            ],
        });
        corpus.insert(Translation {
            code: "nvi".to_string(),
            books: vec![],
        });
        corpus
    }

    fn resolver() -> Resolver {
        Resolver::new(sample_corpus())
    }

    // ============================================================
    // BOOK MATCHING - precedence
    // ============================================================

    #[test]
    fn test_exact_abbrev_beats_substring_of_name() {
        let resolver = resolver();

        // "jo" is João's abbreviation, but also a substring of "Jonas" and
        // "1 João", both of which come earlier or later in source order.
        let book = resolver.find_book("acf", "jo").unwrap();
        assert_eq!(book.name, "João", "Exact abbreviation must win");
    }

    #[test]
    fn test_exact_name_beats_substring() {
        let resolver = resolver();

        // "joão" matches João's name exactly and "1 João" only as substring.
        let book = resolver.find_book("acf", "joão").unwrap();
        assert_eq!(book.name, "João");
    }

    #[test]
    fn test_substring_of_name_matches() {
        let resolver = resolver();

        let book = resolver.find_book("acf", "gêne").unwrap();
        assert_eq!(book.name, "Gênesis");
    }

    #[test]
    fn test_abbrev_inside_query_matches() {
        let resolver = resolver();

        // No exact hit for "gn.", but the abbreviation "gn" is contained in it.
        let book = resolver.find_book("acf", "gn.").unwrap();
        assert_eq!(book.name, "Gênesis");
    }

    #[test]
    fn test_substring_tie_resolves_to_source_order() {
        let resolver = resolver();

        // "o" is a substring of "Jonas", "João" and "1 João" alike; with no
        // exact hit anywhere, the first of them in source order must win.
        let book = resolver.find_book("acf", "o").unwrap();
        assert_eq!(book.name, "Jonas", "First book in source order wins ties");
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let resolver = resolver();

        for query in ["gn", "GN", "Gn", "gênesis", "Gênesis", "GÊNESIS"] {
            let book = resolver
                .find_book("acf", query)
                .unwrap_or_else(|_| panic!("query {:?} should resolve", query));
            assert_eq!(book.name, "Gênesis", "query {:?}", query);
        }
    }

    #[test]
    fn test_unknown_book() {
        let resolver = resolver();

        let err = resolver.find_book("acf", "zzz").unwrap_err();
        assert_eq!(
            err,
            LookupError::BookNotFound {
                query: "zzz".to_string()
            }
        );
    }

    #[test]
    fn test_empty_query_is_not_found() {
        let resolver = resolver();

        assert!(matches!(
            resolver.find_book("acf", "  "),
            Err(LookupError::BookNotFound { .. })
        ));
    }

    // ============================================================
    // TRANSLATION AVAILABILITY
    // ============================================================

    #[test]
    fn test_unknown_translation_is_unavailable() {
        let resolver = resolver();

        let err = resolver.find_book("kjv", "gn").unwrap_err();
        assert_eq!(
            err,
            LookupError::TranslationUnavailable {
                code: "kjv".to_string()
            }
        );
        assert!(matches!(
            resolver.list_books("kjv"),
            Err(LookupError::TranslationUnavailable { .. })
        ));
        assert!(matches!(
            resolver.chapter("kjv", "gn", 1),
            Err(LookupError::TranslationUnavailable { .. })
        ));
        assert!(matches!(
            resolver.verse("kjv", "gn", 1, 1),
            Err(LookupError::TranslationUnavailable { .. })
        ));
    }

    #[test]
    fn test_translation_code_is_case_insensitive() {
        let resolver = resolver();

        assert!(resolver.find_book("ACF", "gn").is_ok());
    }

    #[test]
    fn test_translations_in_load_order() {
        let resolver = resolver();

        assert_eq!(resolver.translations(), vec!["acf", "nvi"]);
    }

    #[test]
    fn test_empty_translation_lists_no_books() {
        let resolver = resolver();

        // Loaded but empty is not an error.
        let books = resolver.list_books("nvi").unwrap();
        assert!(books.is_empty());
    }

    // ============================================================
    // BOOK LISTING
    // ============================================================

    #[test]
    fn test_list_books_preserves_source_order() {
        let resolver = resolver();

        let books = resolver.list_books("acf").unwrap();
        assert_eq!(books.len(), 4);

        let names: Vec<&str> = books.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Gênesis", "Jonas", "João", "1 João"]);
    }

    #[test]
    fn test_list_books_chapter_counts() {
        let resolver = resolver();

        let books = resolver.list_books("acf").unwrap();
        assert_eq!(books[0].chapter_count, 2);
        assert_eq!(books[1].chapter_count, 1);
    }

    // ============================================================
    // CHAPTER RESOLUTION
    // ============================================================

    #[test]
    fn test_chapter_verses_are_one_based() {
        let resolver = resolver();

        let view = resolver.chapter("acf", "gn", 1).unwrap();
        assert_eq!(view.book, "Gênesis");
        assert_eq!(view.abbrev, "gn");
        assert_eq!(view.chapter, 1);
        assert_eq!(view.verses.len(), 2);
        assert_eq!(
            view.verses.get(&1).map(String::as_str),
            Some("No princípio criou Deus os céus e a terra.")
        );
        assert_eq!(
            view.verses.get(&2).map(String::as_str),
            Some("A terra era sem forma e vazia.")
        );
        assert!(view.verses.get(&0).is_none(), "No 0 key at the boundary");
    }

    #[test]
    fn test_chapter_zero_is_not_found() {
        let resolver = resolver();

        let err = resolver.chapter("acf", "gn", 0).unwrap_err();
        assert_eq!(
            err,
            LookupError::ChapterNotFound {
                book: "Gênesis".to_string(),
                chapter: 0
            }
        );
    }

    #[test]
    fn test_chapter_past_end_is_not_found() {
        let resolver = resolver();

        // Gênesis has 2 chapters; 3 must not wrap around.
        let err = resolver.chapter("acf", "gn", 3).unwrap_err();
        assert!(matches!(err, LookupError::ChapterNotFound { ref book, .. } if book == "Gênesis"));
    }

    #[test]
    fn test_chapter_error_carries_resolved_name() {
        let resolver = resolver();

        // Queried by abbreviation, reported by display name.
        let err = resolver.chapter("acf", "jn", 9).unwrap_err();
        assert_eq!(
            err,
            LookupError::ChapterNotFound {
                book: "Jonas".to_string(),
                chapter: 9
            }
        );
    }

    #[test]
    fn test_chapter_unknown_book_reported_first() {
        let resolver = resolver();

        assert!(matches!(
            resolver.chapter("acf", "zzz", 1),
            Err(LookupError::BookNotFound { .. })
        ));
    }

    // ============================================================
    // VERSE RESOLUTION
    // ============================================================

    #[test]
    fn test_verse_lookup() {
        let resolver = resolver();

        let view = resolver.verse("acf", "gn", 1, 2).unwrap();
        assert_eq!(view.book, "Gênesis");
        assert_eq!(view.chapter, 1);
        assert_eq!(view.verse, 2);
        assert_eq!(view.text, "A terra era sem forma e vazia.");
    }

    #[test]
    fn test_verse_out_of_range() {
        let resolver = resolver();

        // Chapter 1 of Gênesis has 2 verses.
        let err = resolver.verse("acf", "gn", 1, 3).unwrap_err();
        assert_eq!(
            err,
            LookupError::VerseNotFound {
                book: "Gênesis".to_string(),
                chapter: 1,
                verse: 3
            }
        );

        assert!(matches!(
            resolver.verse("acf", "gn", 1, 0),
            Err(LookupError::VerseNotFound { .. })
        ));
    }

    #[test]
    fn test_verse_bad_chapter_reported_as_chapter() {
        let resolver = resolver();

        assert!(matches!(
            resolver.verse("acf", "gn", 5, 1),
            Err(LookupError::ChapterNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_verse_is_missing_by_default() {
        let resolver = resolver();

        // João 1:2 exists in the data but its text is empty.
        assert!(matches!(
            resolver.verse("acf", "jo", 1, 2),
            Err(LookupError::VerseNotFound { .. })
        ));
    }

    #[test]
    fn test_empty_verse_policy_can_be_disabled() {
        let resolver = Resolver::with_policy(sample_corpus(), false);

        let view = resolver.verse("acf", "jo", 1, 2).unwrap();
        assert_eq!(view.text, "");
    }

    #[test]
    fn test_repeated_reads_are_identical() {
        let resolver = resolver();

        let first = resolver.verse("acf", "gn", 1, 1).unwrap();
        let second = resolver.verse("acf", "gn", 1, 1).unwrap();
        assert_eq!(first, second, "Corpus is read-only; reads never diverge");
    }

    #[test]
    fn test_concurrent_reads_are_identical() {
        use std::sync::Arc;

        let resolver = Arc::new(resolver());
        let mut handles = Vec::new();
        for _ in 0..8 {
            let resolver = resolver.clone();
            handles.push(std::thread::spawn(move || {
                resolver.verse("acf", "gn", 1, 1).unwrap().text
            }));
        }

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                "No princípio criou Deus os céus e a terra."
            );
        }
    }
}
