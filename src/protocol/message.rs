use num_bigint::BigUint;
use serde::{Serialize, Serializer};

/// Successful prime-check answer.
///
/// `number` is echoed back as a decimal string so clients never lose
/// precision on large values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimeCheckResult {
    #[serde(serialize_with = "as_decimal")]
    pub number: BigUint,
    pub is_prime: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PingBody {
    pub ok: bool,
}

fn as_decimal<S: Serializer>(number: &BigUint, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(number)
}
