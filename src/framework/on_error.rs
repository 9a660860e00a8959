use serenity::http::HttpError;

/// "Unknown interaction" — the token was never valid or Discord gave up on
/// the interaction before we answered.
const UNKNOWN_INTERACTION: isize = 10062;
/// "Unknown webhook" — the interaction webhook is gone.
const UNKNOWN_WEBHOOK: isize = 10015;
/// "Invalid webhook token" — the ~15 minute follow-up window has closed.
const INVALID_WEBHOOK_TOKEN: isize = 50027;

/// Error policy for deferred delivery. Expired-interaction errors are
/// unrecoverable and routine, so they are swallowed; everything else gets an
/// error log. Nothing is retried either way.
pub fn on_delivery_error(error: serenity::Error) {
    if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &error {
        if matches!(
            response.error.code,
            UNKNOWN_INTERACTION | UNKNOWN_WEBHOOK | INVALID_WEBHOOK_TOKEN
        ) {
            log::debug!("interaction expired before delivery: {}", response.error.message);
            return;
        }
    }
    log::error!("deferred delivery failed: {error:?}");
}
