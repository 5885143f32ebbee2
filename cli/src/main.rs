//   Copyright 2026 The Tari Project
//   SPDX-License-Identifier: BSD-3-Clause

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use clap::{CommandFactory, Parser, Subcommand};
use dialoguer::{Input, Select};
use ethers::{
    providers::{Http, Middleware, Provider},
    types::{Address, H256, U256},
    utils::format_ether,
};
use log::debug;
use retro_gaming_client::{
    config::WALLET_KEY_ENV,
    stores::unix_now,
    sync::{connect_wallet, refresh_roles, refresh_round, refresh_scores},
    ActionError,
    ClientConfig,
    GameId,
    GameSettings,
    GameStore,
    Network,
    ReadActions,
    SigningClient,
    VerificationBatch,
    WalletStore,
    WriteActions,
};

// ──────────────────────────────────── CLI ────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "retro-gaming-cli",
    about = "🕹️ A CLI for the Retro Gaming platform contract",
    long_about = "This CLI talks to the Retro Gaming platform contract on Polygon.\n\n\
                  Reads use the public RPC endpoint. Writes are signed with the private key found in \
                  RETRO_GAMING_PRIVATE_KEY.\n\n\
                  A typical round looks like this:\n\
                  1. Run `init` to choose the network and endpoint.\n\
                  2. Players use `submit-score` to stake on a score.\n\
                  3. Verifiers use `verify` to approve or reject submitted scores.\n\
                  4. Once the round has ended, run `distribute` to pay out the winners.\n\
                  5. Everyone uses `withdraw` to collect their rewards."
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = "./retro-gaming.json")]
    config: PathBuf,

    /// RPC endpoint (overrides value stored in config)
    #[arg(long)]
    rpc_url: Option<String>,

    /// Network to use, polygon or amoy (overrides value stored in config)
    #[arg(long)]
    network: Option<Network>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose the network, endpoint and contract and save them to the config file
    Init,
    #[command(flatten)]
    Contract(ContractCommand),
}

/// Commands that need a connection to the platform contract.
#[derive(Subcommand)]
enum ContractCommand {
    /// Show the config and the connected wallet's roles
    Show,
    /// Show the current round of a game
    Round { game: GameId },
    /// Show the on-chain configuration of a game
    GameConfig { game: GameId },
    /// Show the leaderboard of a game, best score first
    Leaderboard {
        game: GameId,
        /// Round id, the current round when omitted
        #[arg(long)]
        round: Option<u64>,
    },
    /// List the scores a player submitted in a round
    PlayerScores {
        game: GameId,
        /// Player address, the connected wallet when omitted
        player: Option<String>,
        #[arg(long)]
        round: Option<u64>,
    },
    /// Show the total stake of a player in a round
    Stake {
        game: GameId,
        player: Option<String>,
        #[arg(long)]
        round: Option<u64>,
    },
    /// Show the prize pool of a round
    PrizePool {
        game: GameId,
        #[arg(long)]
        round: Option<u64>,
    },
    /// Show the activity of a verifier in a round
    VerifierStats {
        game: GameId,
        verifier: Option<String>,
        #[arg(long)]
        round: Option<u64>,
    },
    /// List the contract events since a block
    Events {
        #[arg(long, default_value_t = 0)]
        from_block: u64,
    },
    /// Submit a score, staking on it
    SubmitScore {
        game: GameId,
        score: u128,
        /// Hash of the game session backing the score (32 bytes, hex)
        #[arg(long)]
        hash: String,
        /// Stake in POL, prompted for when omitted
        #[arg(long)]
        stake: Option<String>,
    },
    /// Approve or reject submitted scores of a round
    Verify {
        game: GameId,
        /// Indexes of the scores to approve, e.g. 0,2,3
        #[arg(long, value_delimiter = ',')]
        approve: Vec<u64>,
        /// Indexes of the scores to reject
        #[arg(long, value_delimiter = ',')]
        reject: Vec<u64>,
        #[arg(long)]
        round: Option<u64>,
    },
    /// Distribute the rewards of an ended round
    Distribute {
        game: GameId,
        #[arg(long)]
        round: Option<u64>,
    },
    /// Withdraw the connected wallet's pending balance
    Withdraw,
    /// Configure a game from the settings in the config file (owner only)
    ConfigureGame {
        game: GameId,
        /// Update an existing game instead of adding a new one
        #[arg(long)]
        update: bool,
        #[arg(long)]
        round_duration: Option<u64>,
        /// Minimum stake in POL
        #[arg(long)]
        min_stake: Option<String>,
        #[arg(long)]
        platform_fee: Option<u8>,
        #[arg(long)]
        verifier_fee: Option<u8>,
        #[arg(long)]
        max_score_per_game: Option<u64>,
        #[arg(long)]
        salt_key: Option<String>,
        /// Disable the game (only with --update)
        #[arg(long)]
        inactive: bool,
    },
    /// Allow an address to verify scores (owner only)
    AddVerifier { verifier: String },
    /// Revoke a verifier (owner only)
    RemoveVerifier { verifier: String },
    /// Pause the platform (owner only)
    Pause,
    /// Unpause the platform (owner only)
    Unpause,
}

// ──────────────────────────────── Parse helpers ──────────────────────────────

fn parse_address(s: &str) -> anyhow::Result<Address> {
    s.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address {s}: {e}"))
}

fn parse_hash(s: &str) -> anyhow::Result<H256> {
    s.trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid 32-byte hash {s}: {e}"))
}

fn format_time_left(secs: u64) -> String {
    let (hours, rest) = (secs / 3600, secs % 3600);
    format!("{hours}h {:02}m {:02}s", rest / 60, rest % 60)
}

/// Turns a failed contract action into a message naming the contract error, if there is one.
fn explain<M: Middleware + 'static>(err: ActionError<M>) -> anyhow::Error {
    match err.revert_name() {
        Some(name) => anyhow::anyhow!("❌ Contract rejected the call: {name}"),
        None => anyhow::anyhow!("❌ {err}"),
    }
}

// ──────────────────────────────── Client helpers ─────────────────────────────

struct Session {
    config: ClientConfig,
    reader: ReadActions<Provider<Http>>,
    games: GameStore,
    wallet: WalletStore,
}

impl Session {
    fn new(config: ClientConfig) -> anyhow::Result<Self> {
        let reader = ReadActions::new(config.contract_address()?, config.public_client()?);
        Ok(Self {
            config,
            reader,
            games: GameStore::new(),
            wallet: WalletStore::new(),
        })
    }

    /// Connects the wallet from the environment and refreshes its roles for `game` in `round_id`.
    async fn connect(&self, round_id: U256, game: GameId) -> anyhow::Result<(Address, WriteActions<SigningClient>)> {
        let client: Arc<SigningClient> = connect_wallet(&self.wallet, &self.config)?;
        let account = client.address();
        refresh_roles(&self.reader, &self.wallet, round_id, game)
            .await
            .map_err(explain)?;
        let writer = WriteActions::new(self.reader.address(), client);
        Ok((account, writer))
    }

    async fn round_or_current(&self, round: Option<u64>) -> anyhow::Result<U256> {
        match round {
            Some(round) => Ok(U256::from(round)),
            None => self.reader.current_round_id().await.map_err(explain),
        }
    }

    /// `player` if given, otherwise the address of the wallet in the environment.
    fn player_or_wallet(&self, player: Option<String>) -> anyhow::Result<Address> {
        match player {
            Some(player) => parse_address(&player),
            None => {
                let client = connect_wallet(&self.wallet, &self.config).map_err(|e| {
                    anyhow::anyhow!("No address given and no wallet to default to: {e}")
                })?;
                Ok(client.address())
            }
        }
    }

    fn require_admin(&self) -> anyhow::Result<()> {
        if !self.wallet.is_admin() {
            anyhow::bail!("Connected wallet is not the contract owner.");
        }
        Ok(())
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = ClientConfig::load(&cli.config)?;

    // Allow --network and --rpc-url flags to override stored values
    if let Some(network) = cli.network {
        if network != config.network {
            config.contract_address = None;
        }
        config.network = network;
    }
    if let Some(url) = &cli.rpc_url {
        config.rpc_url = Some(url.clone());
    }
    debug!("Using {} at {}", config.network, config.rpc_url());
    Ok(config)
}

// ─────────────────────────────────── Main ────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Init => cmd_init(&cli.config, config),
        Commands::Contract(command) => run(Session::new(config)?, &cli.config, command).await,
    }
}

async fn run(session: Session, config_path: &Path, command: ContractCommand) -> anyhow::Result<()> {
    match command {
        ContractCommand::Show => cmd_show(&session, config_path).await?,
        ContractCommand::Round { game } => cmd_round(&session, game).await?,
        ContractCommand::GameConfig { game } => cmd_game_config(&session, game).await?,
        ContractCommand::Leaderboard { game, round } => cmd_leaderboard(&session, game, round).await?,
        ContractCommand::PlayerScores { game, player, round } => cmd_player_scores(&session, game, player, round).await?,
        ContractCommand::Stake { game, player, round } => cmd_stake(&session, game, player, round).await?,
        ContractCommand::PrizePool { game, round } => cmd_prize_pool(&session, game, round).await?,
        ContractCommand::VerifierStats { game, verifier, round } => {
            cmd_verifier_stats(&session, game, verifier, round).await?
        }
        ContractCommand::Events { from_block } => cmd_events(&session, from_block).await?,
        ContractCommand::SubmitScore {
            game,
            score,
            hash,
            stake,
        } => cmd_submit_score(&session, game, score, &hash, stake).await?,
        ContractCommand::Verify {
            game,
            approve,
            reject,
            round,
        } => cmd_verify(&session, game, approve, reject, round).await?,
        ContractCommand::Distribute { game, round } => cmd_distribute(&session, game, round).await?,
        ContractCommand::Withdraw => cmd_withdraw(&session).await?,
        ContractCommand::ConfigureGame {
            game,
            update,
            round_duration,
            min_stake,
            platform_fee,
            verifier_fee,
            max_score_per_game,
            salt_key,
            inactive,
        } => {
            let mut settings = session.config.game_settings.clone();
            if let Some(round_duration) = round_duration {
                settings.round_duration = round_duration;
            }
            if let Some(min_stake) = min_stake {
                settings.min_stake = min_stake;
            }
            if let Some(platform_fee) = platform_fee {
                settings.platform_fee = platform_fee;
            }
            if let Some(verifier_fee) = verifier_fee {
                settings.verifier_fee = verifier_fee;
            }
            if let Some(max_score_per_game) = max_score_per_game {
                settings.max_score_per_game = max_score_per_game;
            }
            if let Some(salt_key) = salt_key {
                settings.salt_key = parse_hash(&salt_key)?;
            }
            if inactive {
                if !update {
                    anyhow::bail!("--inactive can only be used together with --update.");
                }
                settings.active = false;
            }
            cmd_configure_game(&session, game, update, &settings).await?
        }
        ContractCommand::AddVerifier { verifier } => cmd_set_verifier(&session, &verifier, true).await?,
        ContractCommand::RemoveVerifier { verifier } => cmd_set_verifier(&session, &verifier, false).await?,
        ContractCommand::Pause => cmd_set_paused(&session, true).await?,
        ContractCommand::Unpause => cmd_set_paused(&session, false).await?,
    }

    Ok(())
}

// ──────────────────────────────────── init ───────────────────────────────────

fn cmd_init(config_path: &Path, mut config: ClientConfig) -> anyhow::Result<()> {
    if config_path.exists() {
        println!("✅ Config found at {}.", config_path.display());
        println!("  🌐 Network:  {}", config.network);
        println!("  🔗 RPC:      {}", config.rpc_url());
        println!();
        Cli::command().print_help()?;
        println!();
        return Ok(());
    }

    let networks = [Network::Polygon, Network::Amoy];
    let network_idx = Select::new()
        .with_prompt("Select network")
        .default(0)
        .items(&networks)
        .interact()?;
    let network = networks[network_idx];

    let rpc_url: String = Input::new()
        .with_prompt("RPC endpoint")
        .default(network.default_rpc_url().to_string())
        .interact_text()?;

    let contract_prompt = match network.default_contract_address() {
        Some(_) => "Platform contract address (leave blank for the production deployment)",
        None => "Platform contract address",
    };
    let contract_input: String = Input::new()
        .with_prompt(contract_prompt)
        .allow_empty(network.default_contract_address().is_some())
        .interact_text()?;

    config.network = network;
    config.rpc_url = Some(rpc_url);
    config.contract_address = if contract_input.trim().is_empty() {
        None
    } else {
        Some(parse_address(&contract_input)?)
    };
    config.save(config_path)?;

    println!("🎉 Config saved to {}", config_path.display());
    println!("  🌐 Network:  {}", config.network);
    println!("  🔗 RPC:      {}", config.rpc_url());
    println!("  📄 Contract: {:?}", config.contract_address()?);
    println!();
    println!("👉 Next step: export {WALLET_KEY_ENV} to sign transactions, then run `round <game>`.");

    Ok(())
}

// ─────────────────────────────────── show ────────────────────────────────────

async fn cmd_show(session: &Session, config_path: &Path) -> anyhow::Result<()> {
    let config = &session.config;
    println!("📁 Config:    {}", config_path.display());
    println!("🌐 Network:   {} (chain id {})", config.network, config.network.chain_id());
    println!("🔗 RPC:       {}", config.rpc_url());
    println!("📄 Contract:  {:?}", session.reader.address());

    let paused = session.reader.paused().await.map_err(explain)?;
    let version = session
        .reader
        .upgrade_interface_version()
        .await
        .map_err(explain)?;
    println!("⏯️  Paused:    {paused}");
    println!("🧩 Version:   {version}");

    if std::env::var(WALLET_KEY_ENV).is_err() {
        println!("\n👛 Wallet: Not connected (set {WALLET_KEY_ENV})");
        return Ok(());
    }

    let round_id = session.reader.current_round_id().await.map_err(explain)?;
    println!("\n👛 Wallet roles in round {round_id}:");
    for game in GameId::ALL {
        session.connect(round_id, game).await?;
        let wallet = session.wallet.snapshot();
        println!(
            "  - {game}: admin {}, verifier {}",
            wallet.is_admin(),
            wallet.is_verifier()
        );
    }
    if let Some(address) = session.wallet.address() {
        println!("  Address: {address:?}");
    }

    Ok(())
}

// ─────────────────────────────────── round ───────────────────────────────────

async fn cmd_round(session: &Session, game: GameId) -> anyhow::Result<()> {
    let round = refresh_round(&session.reader, &session.games, game)
        .await
        .map_err(explain)?;
    let state = session.games.snapshot();
    let now = unix_now();

    println!("🎲 {game} round {}", round.id);
    println!("  Start:        {}", round.start_time);
    println!("  End:          {}", round.end_time);
    match state.current_round_time_left(now) {
        Some(time_left) if state.is_round_active(now) => println!("  Time left:    {}", format_time_left(time_left)),
        _ => println!("  Time left:    Round ended"),
    }
    println!("  Prize pool:   {} POL", format_ether(round.total_prize_pool));
    println!("  Verifiers:    {}", round.verifiers_count);
    println!("  Distributed:  {}", round.rewards_distributed);

    Ok(())
}

async fn cmd_game_config(session: &Session, game: GameId) -> anyhow::Result<()> {
    let config = session.reader.game_config(game).await.map_err(explain)?;

    println!("⚙️  {game} configuration");
    println!("  Active:             {}", config.active);
    println!("  Round duration:     {}", format_time_left(config.round_duration));
    println!("  Minimum stake:      {} POL", format_ether(U256::from(config.min_stake)));
    println!("  Platform fee:       {}%", config.platform_fee);
    println!("  Verifier fee:       {}%", config.verifier_fee);
    println!("  Max scores/player:  {}", config.max_score_per_game);
    println!("  Current round:      {}", config.current_round);
    println!("  Last round start:   {}", config.last_round_start_time);

    Ok(())
}

// ───────────────────────────────── leaderboard ───────────────────────────────

async fn cmd_leaderboard(session: &Session, game: GameId, round: Option<u64>) -> anyhow::Result<()> {
    let round_id = session.round_or_current(round).await?;
    refresh_scores(&session.reader, &session.games, round_id, game)
        .await
        .map_err(explain)?;
    let state = session.games.snapshot();
    let scores = state.sorted_scores(game);

    println!(
        "🏆 {game} leaderboard, round {round_id} ({} player(s))",
        state.active_players(game)
    );
    if scores.is_empty() {
        println!("  No scores yet.");
    }
    for (rank, entry) in scores.iter().enumerate() {
        let verified = if entry.verified { "✅" } else { "⏳" };
        println!(
            "  {:>3}. {verified} {:>10}  {:?}  (block {})",
            rank + 1,
            entry.score,
            entry.player,
            entry.timestamp
        );
    }

    Ok(())
}

async fn cmd_player_scores(
    session: &Session,
    game: GameId,
    player: Option<String>,
    round: Option<u64>,
) -> anyhow::Result<()> {
    let player = session.player_or_wallet(player)?;
    let round_id = session.round_or_current(round).await?;
    let scores = session
        .reader
        .player_scores(round_id, game, player)
        .await
        .map_err(explain)?;

    println!("📜 Scores of {player:?} in {game} round {round_id}:");
    if scores.is_empty() {
        println!("  None");
    }
    for score in &scores {
        let verified = if score.verified { "✅" } else { "⏳" };
        println!(
            "  - {verified} {} (stake {} POL, hash {:?})",
            score.score,
            format_ether(U256::from(score.stake)),
            score.score_hash
        );
    }

    Ok(())
}

async fn cmd_stake(session: &Session, game: GameId, player: Option<String>, round: Option<u64>) -> anyhow::Result<()> {
    let player = session.player_or_wallet(player)?;
    let round_id = session.round_or_current(round).await?;
    let stake = session
        .reader
        .player_game_stake(round_id, game, player)
        .await
        .map_err(explain)?;
    println!(
        "💰 {player:?} staked {} POL in {game} round {round_id}",
        format_ether(stake)
    );
    Ok(())
}

async fn cmd_prize_pool(session: &Session, game: GameId, round: Option<u64>) -> anyhow::Result<()> {
    let round_id = session.round_or_current(round).await?;
    let pool = session
        .reader
        .game_prize_pool(round_id, game)
        .await
        .map_err(explain)?;
    println!("💰 {game} round {round_id} prize pool: {} POL", format_ether(pool));
    Ok(())
}

async fn cmd_verifier_stats(
    session: &Session,
    game: GameId,
    verifier: Option<String>,
    round: Option<u64>,
) -> anyhow::Result<()> {
    let verifier = session.player_or_wallet(verifier)?;
    let round_id = session.round_or_current(round).await?;
    let stats = session
        .reader
        .verifier_stats(round_id, game, verifier)
        .await
        .map_err(explain)?;

    println!("🔍 Verifier {verifier:?} in {game} round {round_id}");
    println!("  Active:   {}", stats.is_active);
    println!("  Actions:  {}", stats.actions);
    println!("  Rewards:  {} POL", format_ether(stats.rewards));
    Ok(())
}

async fn cmd_events(session: &Session, from_block: u64) -> anyhow::Result<()> {
    let events = session
        .reader
        .events_since(from_block)
        .await
        .map_err(explain)?;
    println!("📣 {} event(s) since block {from_block}:", events.len());
    for event in &events {
        println!("  - {event:?}");
    }
    Ok(())
}

// ──────────────────────────────── submit-score ───────────────────────────────

async fn cmd_submit_score(
    session: &Session,
    game: GameId,
    score: u128,
    hash: &str,
    stake: Option<String>,
) -> anyhow::Result<()> {
    let score_hash = parse_hash(hash)?;
    let stake = match stake {
        Some(stake) => stake,
        None => Input::new()
            .with_prompt("Stake (POL)")
            .default(session.config.game_settings.min_stake.clone())
            .interact_text()?,
    };

    let round_id = session.round_or_current(None).await?;
    let (account, writer) = session.connect(round_id, game).await?;

    println!("🕹️ Submitting {game} score {score} with a stake of {stake} POL...");
    let tx_hash = writer
        .submit_score(account, game, score, score_hash, &stake)
        .await
        .map_err(explain)?;
    println!("✅ Score submitted in {tx_hash:?}");
    println!("👉 Next step: wait for a verifier to run `verify`, then check `leaderboard {game}`.");

    Ok(())
}

// ─────────────────────────────────── verify ──────────────────────────────────

async fn cmd_verify(
    session: &Session,
    game: GameId,
    approve: Vec<u64>,
    reject: Vec<u64>,
    round: Option<u64>,
) -> anyhow::Result<()> {
    let batch = approve
        .iter()
        .map(|index| (*index, true))
        .chain(reject.iter().map(|index| (*index, false)))
        .collect::<VerificationBatch>();
    if batch.is_empty() {
        anyhow::bail!("Nothing to verify. Pass score indexes with --approve and/or --reject.");
    }

    let round_id = session.round_or_current(round).await?;
    let (account, writer) = session.connect(round_id, game).await?;
    if !session.wallet.is_verifier() {
        anyhow::bail!("Connected wallet is not an active verifier of {game} in round {round_id}.");
    }

    println!(
        "🔍 Verifying {} score(s) of {game} round {round_id}...",
        batch.len()
    );
    let tx_hash = writer
        .verify_scores_batch(account, round_id, game, &batch)
        .await
        .map_err(explain)?;
    println!("✅ Scores verified in {tx_hash:?}");

    Ok(())
}

// ───────────────────────────────── distribute ────────────────────────────────

async fn cmd_distribute(session: &Session, game: GameId, round: Option<u64>) -> anyhow::Result<()> {
    let round_id = session.round_or_current(round).await?;
    let (account, writer) = session.connect(round_id, game).await?;

    println!("🏆 Distributing rewards of {game} round {round_id}...");
    let tx_hash = writer
        .distribute_rewards(account, round_id, game)
        .await
        .map_err(explain)?;
    println!("✅ Rewards distributed in {tx_hash:?}");
    println!("👉 Next step: winners run `withdraw` to collect their rewards.");

    Ok(())
}

// ────────────────────────────────── withdraw ─────────────────────────────────

async fn cmd_withdraw(session: &Session) -> anyhow::Result<()> {
    let client = connect_wallet(&session.wallet, &session.config)?;
    let account = client.address();
    let writer = WriteActions::new(session.reader.address(), client);

    println!("💸 Withdrawing pending balance of {account:?}...");
    let tx_hash = writer.withdraw(account).await.map_err(explain)?;
    println!("✅ Withdrawal processed in {tx_hash:?}");

    Ok(())
}

// ──────────────────────────────── owner commands ─────────────────────────────

async fn cmd_configure_game(
    session: &Session,
    game: GameId,
    update: bool,
    settings: &GameSettings,
) -> anyhow::Result<()> {
    let round_id = session.round_or_current(None).await?;
    let (account, writer) = session.connect(round_id, game).await?;
    session.require_admin()?;

    let tx_hash = if update {
        println!("⚙️  Updating {game} configuration...");
        writer
            .update_game_config(account, game, settings)
            .await
            .map_err(explain)?
    } else {
        println!("⚙️  Adding {game}...");
        writer
            .set_game_config(account, game, settings)
            .await
            .map_err(explain)?
    };
    println!("✅ {game} configured in {tx_hash:?}");

    Ok(())
}

async fn cmd_set_verifier(session: &Session, verifier: &str, add: bool) -> anyhow::Result<()> {
    let verifier = parse_address(verifier)?;
    let round_id = session.round_or_current(None).await?;
    let (account, writer) = session.connect(round_id, GameId::Snake).await?;
    session.require_admin()?;

    let tx_hash = if add {
        println!("➕ Adding verifier {verifier:?}...");
        writer.add_verifier(account, verifier).await
    } else {
        println!("➖ Removing verifier {verifier:?}...");
        writer.remove_verifier(account, verifier).await
    }
    .map_err(explain)?;
    println!("✅ Verifiers updated in {tx_hash:?}");

    Ok(())
}

async fn cmd_set_paused(session: &Session, pause: bool) -> anyhow::Result<()> {
    let round_id = session.round_or_current(None).await?;
    let (account, writer) = session.connect(round_id, GameId::Snake).await?;
    session.require_admin()?;

    let tx_hash = if pause {
        println!("⏸️  Pausing the platform...");
        writer.pause(account).await
    } else {
        println!("▶️  Unpausing the platform...");
        writer.unpause(account).await
    }
    .map_err(explain)?;
    println!("✅ Done in {tx_hash:?}");

    Ok(())
}
