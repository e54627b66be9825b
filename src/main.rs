use std::env;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::broadcast::error::RecvError;

use devconnect_bidding::api::{ApiConfig, BiddingApi};
use devconnect_bidding::domain::{Identity, Role};
use devconnect_bidding::money::{format_amount, Currency};
use devconnect_bidding::realtime::{SocketTransport, Transport, WsConfig};
use devconnect_bidding::session::RoomSession;

/// Room watcher: joins a bidding room and logs pushes and derived stats until
/// the auction reaches a terminal state.
///
/// Usage: `devconnect-bidding <room-id> <user-id> <user-name> [client|freelancer]`
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let room_id = args.next().ok_or("missing room id argument")?;
    let user_id = args.next().ok_or("missing user id argument")?;
    let user_name = args.next().ok_or("missing user name argument")?;
    let role = match args.next().as_deref() {
        Some("client") => Role::Client,
        _ => Role::Freelancer,
    };
    let currency = Currency::INR;

    let backend = Arc::new(BiddingApi::new(ApiConfig::from_env())?);
    let transport = Arc::new(SocketTransport::connect(WsConfig::from_env()).await?);

    let mut events = transport.events();
    let mut session = RoomSession::open(
        transport.clone(),
        backend,
        Identity::new(user_id, user_name, role),
        room_id,
    )
    .await?;

    loop {
        let event = match events.recv().await {
            Ok(event) => event,
            Err(RecvError::Lagged(missed)) => {
                warn!("Lagged behind by {} events, waiting for reconciliation", missed);
                continue;
            }
            Err(RecvError::Closed) => break,
        };

        if let Err(err) = session.handle(event) {
            warn!("{}", err);
            continue;
        }

        let view = session.view();
        let stats = session.stats();
        info!(
            "{} | price {} | bids {} | bidders {} | saved {}",
            view.status,
            format_amount(currency, view.current_price),
            stats.total_bids,
            stats.unique_bidders,
            format_amount(currency, stats.savings),
        );

        if view.status.is_terminal() {
            if let Some(winner) = &view.winner {
                info!(
                    "Winner: {} at {}",
                    winner.freelancer_name,
                    format_amount(currency, winner.amount)
                );
            }
            break;
        }
    }

    session.leave();
    transport.close();
    Ok(())
}
