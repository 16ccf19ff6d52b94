/// Big number helpers.
///
/// Small conversions between `num-bigint` values and machine integers that
/// the Gödel numbering needs: splitting off a small tag and checking that a
/// big exponent is still a usable shift amount.
pub mod num;
