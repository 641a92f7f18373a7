use std::time::Duration;

use env_flags::env_flags;

env_flags! {
    /// TCP connect deadline for the models listing request.
    pub SKIFF_CONNECT_TIMEOUT_MS: Duration = Duration::from_millis(5_000), |value| {
        value.parse().map(Duration::from_millis)
    };

    /// Overall deadline for the models listing request.
    pub SKIFF_REQUEST_TIMEOUT_MS: Duration = Duration::from_millis(30_000), |value| {
        value.parse().map(Duration::from_millis)
    };
}
