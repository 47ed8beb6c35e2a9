/// Classification of why a provider did not produce a usable result.
///
/// Every provider-local failure mode maps to one of these; the chain records
/// the reason for observability and moves on. No class is retried and none
/// propagates to the caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DeclineReason {
    /// Transport-level failure or non-success upstream status.
    Network,

    /// The provider answered but the payload could not be parsed.
    Malformed,

    /// The provider rate limited the request (HTTP 429).
    RateLimited,

    /// The per-provider timeout elapsed before the provider answered.
    TimedOut,

    /// The result was well-formed but carried no usable media variants.
    Empty,

    /// The total resolution deadline was exhausted before this provider ran.
    DeadlineExceeded,
}
