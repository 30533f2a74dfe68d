//! Named anchored sequences.
//!
//! [`NOTATION_CASES`] pairs notation inputs with a regular expression that
//! every valid shuffle of the input matches in full.
//!
//! # Example
//!
//! ```
//! use tether_test::cases::NOTATION_CASES;
//! use tether_test::notation::Notation;
//!
//! for case in NOTATION_CASES {
//!     assert!(Notation::parse(case.input).is_ok(), "{}", case.name);
//! }
//! ```

use tether_core::AnchorKind;

/// A notation input and the pattern its shuffles must match.
#[derive(Debug, Clone, Copy)]
pub struct NotationCase {
    pub name: &'static str,
    pub input: &'static str,
    pub pattern: &'static str,
}

const fn case(name: &'static str, input: &'static str, pattern: &'static str) -> NotationCase {
    NotationCase {
        name,
        input,
        pattern,
    }
}

pub const NOTATION_CASES: &[NotationCase] = &[
    case("empty", "", "^$"),
    case("one choice, not anchored", "A", "^A$"),
    case("one choice, anchored", "A.", "^A$"),
    case("two choices, neither anchored", "AB", "^(AB|BA)$"),
    case("two choices, last anchored", "AB.", "^AB$"),
    case("two choices, first anchored", "A.B", "^AB$"),
    case("two choices, both anchored", "A.B.", "^AB$"),
    case("three choices, middle anchored", "AB.C", "^(ABC|CBA)$"),
    case("three choices, none anchored", "ABC", "^(ABC|BAC|BCA|CBA|CAB|ACB)$"),
    case("three choices, first anchored", "A.BC", "^A..$"),
    case("three choices, last anchored", "ABC.", "^..C$"),
    case("five choices, last anchored", "ABDCE.", "^[^E]{4}E$"),
    case("hold CD", "ABC.D.E", "^[^CD]*CD[^CD]*$"),
    case("dangling first", "A<B", "^(AB|BA)$"),
    case("dangling last", "AB>", "^(AB|BA)$"),
    case("mutual anchor", "A>B<", "^AB$"),
    case("to next", "A>BC", "^(ABC|CAB)$"),
    case("to previous", "AB<C", "^(ABC|CAB)$"),
    case("to next chain", "A>B>CD", "^(ABCD|DABC)$"),
    case("to previous chain", "AB<C<D", "^(ABCD|DABC)$"),
    case("mixed chain", "A>BC<D", "^(ABCD|DABC)$"),
    case("mutual anchor in chain", "A>B<C<", "^ABC$"),
    case("to next onto pinned", "A>B.C", "^(ABC|CBA)$"),
    case("to previous onto pinned", "A.B<C", "^A(BC|CB)$"),
    case("two chains", "AB<CD<", "^(ABCD|CDAB)$"),
    case("chain beside pinned", "AB<C.D", "^ABCD$"),
    case("chains around pinned", "A>BC.DE", "^(ABC(DE|ED)|(DE|ED)CAB)$"),
];

/// Named item lists with anchors, in the style of survey choices.
pub fn choice_lists() -> Vec<Vec<(&'static str, AnchorKind)>> {
    use AnchorKind::{None, Position, ToNext, ToPrevious};

    vec![
        vec![],
        vec![("blue", None)],
        vec![("banana", Position)],
        vec![("male", None), ("female", None)],
        vec![("male", None), ("female", Position)],
        vec![("male", Position), ("female", None)],
        vec![("male", Position), ("female", Position)],
        vec![("coke", None), ("water", Position), ("tea", None)],
        vec![
            ("internet", None),
            ("television", None),
            ("radio", None),
            ("newspapers", None),
        ],
        vec![
            ("mazda", None),
            ("toyota", None),
            ("miata", ToPrevious),
            ("ford", None),
            ("none of the above", Position),
        ],
        vec![
            ("strongly agree", ToNext),
            ("agree", None),
            ("neutral", Position),
            ("disagree", None),
            ("strongly disagree", ToPrevious),
        ],
    ]
}
