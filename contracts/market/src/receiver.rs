// Transfer-with-notify receiver interface

use soroban_sdk::{contractclient, Address, Bytes, Env};

/// Implemented by contracts that accept `transfer_and_call`
///
/// `token` is the token contract sending the notification. Receivers must
/// compare it against the token they expect and call `token.require_auth()`,
/// which only the token itself can satisfy.
#[contractclient(name = "TokenReceiverClient")]
pub trait TokenReceiver {
    fn on_token_received(
        env: Env,
        token: Address,
        operator: Address,
        from: Address,
        amount: i128,
        data: Bytes,
    );
}
