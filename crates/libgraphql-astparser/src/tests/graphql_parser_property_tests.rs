//! Property-based tests over generated executable documents.
//!
//! Checks that printing reaches a fixed point after one round, that a
//! broken document yields exactly one external error, and that tokenizer
//! limits accept exactly the documents whose measured stats fit.

use proptest::prelude::*;

use crate::GraphQLParser;
use crate::OperationReport;
use crate::TokenizerLimitError;
use crate::TokenizerLimits;
use crate::TokenizerStats;
use crate::ast::Document;
use crate::parse_document_from_str;
use crate::print_document;

// =============================================================================
// Strategies
// =============================================================================

fn name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_][a-zA-Z0-9_]{0,8}").expect("valid regex")
}

fn value_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        any::<i32>().prop_map(|n| n.to_string()),
        (any::<i16>(), 0u8..100).prop_map(|(n, frac)| format!("{n}.{frac}")),
        "[a-zA-Z0-9 ]{0,10}".prop_map(|s| format!("\"{s}\"")),
        Just("true".to_string()),
        Just("null".to_string()),
        name_strategy().prop_map(|n| format!("${n}")),
        "[A-Z][A-Z_]{0,6}",
    ];
    leaf.prop_recursive(3, 16, 3, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..3)
                .prop_map(|items| format!("[{}]", items.join(" "))),
            prop::collection::vec((name_strategy(), inner), 0..3).prop_map(|fields| {
                let body: Vec<_> = fields
                    .into_iter()
                    .map(|(name, value)| format!("{name}: {value}"))
                    .collect();
                format!("{{{}}}", body.join(", "))
            }),
        ]
    })
}

fn arguments_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((name_strategy(), value_strategy()), 0..3).prop_map(|args| {
        if args.is_empty() {
            return String::new();
        }
        let body: Vec<_> = args
            .into_iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect();
        format!("({})", body.join(" "))
    })
}

fn field_strategy() -> impl Strategy<Value = String> {
    (prop::option::of(name_strategy()), name_strategy(), arguments_strategy()).prop_map(
        |(alias, name, args)| match alias {
            Some(alias) => format!("{alias}: {name}{args}"),
            None => format!("{name}{args}"),
        },
    )
}

fn selection_set_strategy() -> impl Strategy<Value = String> {
    let leaf = prop::collection::vec(field_strategy(), 1..4)
        .prop_map(|fields| format!("{{ {} }}", fields.join(" ")));
    leaf.prop_recursive(4, 48, 4, |inner| {
        prop::collection::vec((field_strategy(), prop::option::of(inner)), 1..4).prop_map(
            |selections| {
                let body: Vec<_> = selections
                    .into_iter()
                    .map(|(field, set)| match set {
                        Some(set) => format!("{field} {set}"),
                        None => field,
                    })
                    .collect();
                format!("{{ {} }}", body.join("\n"))
            },
        )
    })
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop_oneof![Just("query"), Just("mutation"), Just("subscription")], selection_set_strategy()),
        1..4,
    )
    .prop_map(|operations| {
        operations
            .into_iter()
            .enumerate()
            .map(|(i, (kind, set))| format!("{kind} Op{i} {set}"))
            .collect::<Vec<_>>()
            .join("\n\n")
    })
}

fn parse_limited(
    source: &str,
    limits: TokenizerLimits,
) -> Result<TokenizerStats, TokenizerLimitError> {
    let mut parser = GraphQLParser::new();
    let mut doc = Document::new();
    let mut report = OperationReport::new();
    doc.reset_input_str(source);
    parser.parse_with_limits(limits, &mut doc, &mut report)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn generated_documents_parse(source in document_strategy()) {
        let (_, report) = parse_document_from_str(&source);
        prop_assert!(!report.has_errors(), "{}\n{}", source, report);
    }

    #[test]
    fn printing_reaches_a_fixed_point(source in document_strategy()) {
        let (doc, report) = parse_document_from_str(&source);
        prop_assert!(!report.has_errors());

        let printed = print_document(&doc);
        let (reparsed, report) = parse_document_from_str(&printed);
        prop_assert!(!report.has_errors(), "{}\n{}", printed, report);
        prop_assert_eq!(print_document(&reparsed), printed);
        prop_assert_eq!(reparsed.operation_definitions.len(), doc.operation_definitions.len());
        prop_assert_eq!(reparsed.fields.len(), doc.fields.len());
    }

    /// Cutting the last operation short always leaves an unclosed
    /// selection set, which is reported once.
    #[test]
    fn truncated_documents_report_exactly_one_error(
        source in document_strategy(),
        cut in any::<prop::sample::Index>(),
    ) {
        let last_start = source.rfind("\n\n").map_or(0, |i| i + 2);
        let last_brace = source.rfind('}').expect("generated documents end in a brace");
        let cut = last_start + 1 + cut.index(last_brace - last_start);
        let (_, report) = parse_document_from_str(&source[..cut]);
        prop_assert_eq!(report.external_errors.len(), 1, "{:?}", &source[..cut]);
        prop_assert!(report.internal_errors.is_empty());
    }

    #[test]
    fn limits_accept_exactly_the_measured_stats(source in document_strategy()) {
        let stats = parse_limited(&source, TokenizerLimits::default())
            .expect("limits of 0 never fail");
        prop_assert!(stats.total_depth > 0);
        prop_assert!(stats.total_fields > 0);

        let exact = TokenizerLimits::new(stats.total_depth, stats.total_fields);
        prop_assert_eq!(parse_limited(&source, exact), Ok(stats));

        let roomy = TokenizerLimits::new(stats.total_depth + 1, stats.total_fields + 5);
        prop_assert_eq!(parse_limited(&source, roomy), Ok(stats));

        if stats.total_depth > 1 {
            let tight = TokenizerLimits::new(stats.total_depth - 1, 0);
            prop_assert_eq!(
                parse_limited(&source, tight),
                Err(TokenizerLimitError::DepthLimitExceeded { limit: stats.total_depth - 1 }),
            );
        }
        if stats.total_fields > 1 {
            let tight = TokenizerLimits::new(0, stats.total_fields - 1);
            prop_assert_eq!(
                parse_limited(&source, tight),
                Err(TokenizerLimitError::FieldsLimitExceeded { limit: stats.total_fields - 1 }),
            );
        }
    }
}
