use crate::{BooleanExpression, PostClasses};
use std::fmt::{Display, Error, Formatter};
use std::ops::{BitAnd, BitOr};
use tracing::debug;

impl PostClasses {
    /// $T_0$: functions that are `false` when all arguments are `false`.
    pub const PRESERVES_ZERO: PostClasses = PostClasses(1);
    /// $T_1$: functions that are `true` when all arguments are `true`.
    pub const PRESERVES_ONE: PostClasses = PostClasses(1 << 1);
    /// $M$: monotone functions.
    pub const MONOTONE: PostClasses = PostClasses(1 << 2);
    /// $S$: self-dual functions.
    pub const SELF_DUAL: PostClasses = PostClasses(1 << 3);
    /// $L$: linear functions (Zhegalkin polynomial of degree at most one).
    pub const LINEAR: PostClasses = PostClasses(1 << 4);

    /// No class at all.
    pub const NONE: PostClasses = PostClasses(0);
    /// All five classes.
    pub const ALL: PostClasses = PostClasses(0b1_1111);

    /// The five individual classes, in the order of their bits.
    pub const CLASSES: [PostClasses; 5] = [
        PostClasses::PRESERVES_ZERO,
        PostClasses::PRESERVES_ONE,
        PostClasses::MONOTONE,
        PostClasses::SELF_DUAL,
        PostClasses::LINEAR,
    ];

    /// Returns `true` if every class set in `other` is also set in `self`.
    pub fn contains(self, other: PostClasses) -> bool {
        self.0 & other.0 == other.0
    }

    /// The raw bit mask.
    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn preserves_zero(self) -> bool {
        self.contains(PostClasses::PRESERVES_ZERO)
    }

    pub fn preserves_one(self) -> bool {
        self.contains(PostClasses::PRESERVES_ONE)
    }

    pub fn is_monotone(self) -> bool {
        self.contains(PostClasses::MONOTONE)
    }

    pub fn is_self_dual(self) -> bool {
        self.contains(PostClasses::SELF_DUAL)
    }

    pub fn is_linear(self) -> bool {
        self.contains(PostClasses::LINEAR)
    }

    fn name(self) -> &'static str {
        match self {
            PostClasses::PRESERVES_ZERO => "T0",
            PostClasses::PRESERVES_ONE => "T1",
            PostClasses::MONOTONE => "M",
            PostClasses::SELF_DUAL => "S",
            PostClasses::LINEAR => "L",
            _ => "?",
        }
    }
}

impl BitOr for PostClasses {
    type Output = PostClasses;

    fn bitor(self, rhs: Self) -> Self::Output {
        PostClasses(self.0 | rhs.0)
    }
}

impl BitAnd for PostClasses {
    type Output = PostClasses;

    fn bitand(self, rhs: Self) -> Self::Output {
        PostClasses(self.0 & rhs.0)
    }
}

/// Lists the contained classes, e.g. `{T0, T1, M}`.
impl Display for PostClasses {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let names: Vec<&str> = PostClasses::CLASSES
            .iter()
            .filter(|class| self.contains(**class))
            .map(|class| class.name())
            .collect();
        write!(f, "{{{}}}", names.join(", "))
    }
}

/// Methods for classifying expressions with respect to the Post classes.
impl BooleanExpression {
    /// Compute the Post classes of the function represented by this expression.
    ///
    /// All classes are decided using only the truth table (and the Zhegalkin coefficients
    /// derived from it).
    pub fn post_classes(&self) -> PostClasses {
        let table = self.truth_table();
        let mut result = PostClasses::NONE;
        if !table[0] {
            result = result | PostClasses::PRESERVES_ZERO;
        }
        if table[table.len() - 1] {
            result = result | PostClasses::PRESERVES_ONE;
        }
        if is_monotone(table) {
            result = result | PostClasses::MONOTONE;
        }
        if is_self_dual(table) {
            result = result | PostClasses::SELF_DUAL;
        }
        if self.is_linear() {
            result = result | PostClasses::LINEAR;
        }
        debug!(formula = %self, classes = %result, "classified formula");
        result
    }

    /// **(internal)** No monomial of the Zhegalkin polynomial has degree two or more.
    fn is_linear(&self) -> bool {
        self.zhegalkin_coefficients()
            .iter()
            .enumerate()
            .all(|(mask, coefficient)| !*coefficient || mask.count_ones() <= 1)
    }
}

/// **(internal)** Raising any single variable from `false` to `true` never lowers the value.
///
/// Comparable assignments are connected by chains of such single-bit steps, so checking
/// all of them covers every comparable pair.
fn is_monotone(table: &[bool]) -> bool {
    let rows = table.len();
    (0..rows).all(|row| {
        let mut bit = 1;
        while bit < rows {
            if row & bit == 0 && table[row] && !table[row | bit] {
                return false;
            }
            bit <<= 1;
        }
        true
    })
}

/// **(internal)** The value in every row is the negation of the value in the complementary row.
fn is_self_dual(table: &[bool]) -> bool {
    let mask = table.len() - 1;
    (0..table.len()).all(|row| table[row] != table[!row & mask])
}

/// Decide whether the system of expressions is functionally complete.
///
/// By Post's criterion, this is the case iff for each of the five Post classes, the system
/// contains an expression outside of that class. An empty system is never complete.
pub fn is_functionally_complete(system: &[BooleanExpression]) -> bool {
    let mut violated = PostClasses::NONE;
    for expression in system {
        let classes = expression.post_classes();
        // Classes this expression does not belong to.
        violated = violated | PostClasses(!classes.0 & PostClasses::ALL.0);
    }
    debug!(
        formulas = system.len(),
        violated = %violated,
        "checked functional completeness"
    );
    violated == PostClasses::ALL
}
