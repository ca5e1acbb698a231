// LiteSVM helpers for the fixed-rate vault program
//
// The LiteSVM suites load the built programs from target/deploy. Build them
// first, then run the ignored tests:
//
//   cargo build-sbf
//   cargo test -- --ignored

#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, AnchorSerialize};
use fixed_rate_vault::state::{Pool, Vault};
use litesvm::{types::TransactionResult, LiteSVM};
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, MintTo};
use solana_sdk::{
    clock::Clock,
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;
use spl_associated_token_account::get_associated_token_address;

// Program IDs matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(fixed_rate_vault::ID.to_bytes());
pub const VENUE_PROGRAM_ID: Pubkey = Pubkey::new_from_array(cp_venue::ID.to_bytes());

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

// PDA Seeds (must match constants.rs)
pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
pub const POOL_SEED: &[u8] = b"pool";
pub const CLAIM_MINT_SEED: &[u8] = b"claim_mint";

pub const AMM_CONFIG_SEED: &[u8] = b"amm_config";
pub const AMM_AUTHORITY_SEED: &[u8] = b"amm_authority";
pub const LP_MINT_SEED: &[u8] = b"lp_mint";

pub const DECIMALS: u8 = 9;

const DEPLOY_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../target/deploy");

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash(preimage.as_bytes()).to_bytes()[..8]);
    discriminator
}

pub fn encode<T: AnchorSerialize>(args: &T) -> Vec<u8> {
    let mut data = Vec::new();
    args.serialize(&mut data).expect("serialize args");
    data
}

fn load_program(svm: &mut LiteSVM, id: Pubkey, name: &str) {
    let path = format!("{}/{}", DEPLOY_DIR, name);
    let bytes = std::fs::read(&path)
        .unwrap_or_else(|e| panic!("{} missing ({}): run `cargo build-sbf` first", path, e));
    svm.add_program(id, &bytes).expect("Failed to add program");
}

// LiteSVM with the vault and the venue loaded
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    load_program(&mut svm, PROGRAM_ID, "fixed_rate_vault.so");
    load_program(&mut svm, VENUE_PROGRAM_ID, "cp_venue.so");
    svm
}

pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

pub fn send(svm: &mut LiteSVM, ixs: &[Instruction], payer: &Keypair, signers: &[&Keypair]) -> TransactionResult {
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), signers, svm.latest_blockhash());
    let result = svm.send_transaction(tx);
    svm.expire_blockhash();
    result
}

// Asserts the transaction failed with the named program error
pub fn assert_fails_with(result: TransactionResult, error_name: &str) {
    match result {
        Ok(_) => panic!("Transaction should have failed with {}", error_name),
        Err(failed) => {
            let found = failed
                .meta
                .logs
                .iter()
                .any(|log| log.contains(&format!("Error Code: {}", error_name)));
            assert!(found, "Expected {} in logs: {:#?}", error_name, failed.meta.logs);
        }
    }
}

pub fn token_balance(svm: &LiteSVM, account: &Pubkey) -> u64 {
    let account: spl_token::state::Account =
        get_spl_account(svm, account).expect("token account should exist");
    account.amount
}

// Creates `owner`'s ATA for `mint` holding `amount`
pub fn fund(svm: &mut LiteSVM, mint_authority: &Keypair, owner: &Keypair, mint: &Pubkey, amount: u64) -> Pubkey {
    let ata = CreateAssociatedTokenAccount::new(svm, owner, mint)
        .owner(&owner.pubkey())
        .send()
        .expect("Failed to create ATA");
    if amount > 0 {
        MintTo::new(svm, mint_authority, mint, &ata, amount)
            .owner(mint_authority)
            .send()
            .expect("Failed to mint");
    }
    ata
}

// Funded wallet holding `amount` of `mint`
pub fn depositor_with(svm: &mut LiteSVM, mint_authority: &Keypair, mint: &Pubkey, amount: u64) -> Keypair {
    let depositor = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);
    fund(svm, mint_authority, &depositor, mint, amount);
    depositor
}

pub fn fetch_vault(svm: &LiteSVM, vault: &Pubkey) -> Vault {
    let account = svm.get_account(vault).expect("vault should exist");
    Vault::try_deserialize(&mut account.data.as_slice()).expect("vault layout")
}

pub fn fetch_pool(svm: &LiteSVM, pool: &Pubkey) -> Pool {
    let account = svm.get_account(pool).expect("pool should exist");
    Pool::try_deserialize(&mut account.data.as_slice()).expect("pool layout")
}

// Venue calls expire a minute after the current block time
pub fn deadline(svm: &LiteSVM) -> i64 {
    svm.get_sysvar::<Clock>().unix_timestamp + 60
}

// ======================== PDAs ========================

pub fn derive_vault_pda(operator: &Pubkey, vault_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[VAULT_SEED, operator.as_ref(), &vault_id.to_le_bytes()],
        &PROGRAM_ID,
    )
    .0
}

pub fn derive_vault_authority_pda(vault: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, vault.as_ref()], &PROGRAM_ID).0
}

pub fn derive_pool_pda(vault: &Pubkey, token_mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[POOL_SEED, vault.as_ref(), token_mint.as_ref()], &PROGRAM_ID).0
}

// Vault and pool claim mints share the seed; `owner` is the vault or pool
pub fn derive_claim_mint_pda(owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[CLAIM_MINT_SEED, owner.as_ref()], &PROGRAM_ID).0
}

// Everything a test needs to address one vault
pub struct VaultKeys {
    pub operator: Pubkey,
    pub vault: Pubkey,
    pub authority: Pubkey,
    pub base_mint: Pubkey,
    pub claim_mint: Pubkey,
    pub base_reserve: Pubkey,
    pub fee_recipient: Pubkey,
}

impl VaultKeys {
    pub fn new(operator: &Pubkey, vault_id: u64, base_mint: &Pubkey, fee_recipient: &Pubkey) -> Self {
        let vault = derive_vault_pda(operator, vault_id);
        let authority = derive_vault_authority_pda(&vault);
        Self {
            operator: *operator,
            vault,
            authority,
            base_mint: *base_mint,
            claim_mint: derive_claim_mint_pda(&vault),
            base_reserve: get_associated_token_address(&authority, base_mint),
            fee_recipient: *fee_recipient,
        }
    }
}

pub struct PoolKeys {
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    pub claim_mint: Pubkey,
    pub token_reserve: Pubkey,
}

impl PoolKeys {
    pub fn new(vault: &VaultKeys, token_mint: &Pubkey) -> Self {
        let pool = derive_pool_pda(&vault.vault, token_mint);
        Self {
            pool,
            token_mint: *token_mint,
            claim_mint: derive_claim_mint_pda(&pool),
            token_reserve: get_associated_token_address(&vault.authority, token_mint),
        }
    }
}

// One constant-product pool on the venue
pub struct VenueKeys {
    pub pool_config: Pubkey,
    pub authority: Pubkey,
    pub lp_mint: Pubkey,
    pub mint_a: Pubkey,
    pub mint_b: Pubkey,
    pub vault_a: Pubkey,
    pub vault_b: Pubkey,
}

impl VenueKeys {
    pub fn new(mint_a: &Pubkey, mint_b: &Pubkey) -> Self {
        let pool_config = Pubkey::find_program_address(
            &[AMM_CONFIG_SEED, mint_a.as_ref(), mint_b.as_ref()],
            &VENUE_PROGRAM_ID,
        )
        .0;
        let authority =
            Pubkey::find_program_address(&[AMM_AUTHORITY_SEED, pool_config.as_ref()], &VENUE_PROGRAM_ID).0;
        Self {
            pool_config,
            authority,
            lp_mint: Pubkey::find_program_address(&[LP_MINT_SEED, pool_config.as_ref()], &VENUE_PROGRAM_ID).0,
            mint_a: *mint_a,
            mint_b: *mint_b,
            vault_a: get_associated_token_address(&authority, mint_a),
            vault_b: get_associated_token_address(&authority, mint_b),
        }
    }
}

fn programs() -> [AccountMeta; 3] {
    [
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

fn build(program_id: Pubkey, method: &str, args: Vec<u8>, mut accounts: Vec<AccountMeta>, with_programs: bool) -> Instruction {
    if with_programs {
        accounts.extend(programs());
    }
    let mut data = anchor_discriminator(method).to_vec();
    data.extend(args);
    Instruction {
        program_id,
        accounts,
        data,
    }
}

fn instruction(method: &str, args: Vec<u8>, accounts: Vec<AccountMeta>, with_programs: bool) -> Instruction {
    build(PROGRAM_ID, method, args, accounts, with_programs)
}

// ======================== VAULT INSTRUCTIONS ========================

pub fn build_initialize_vault_ix(
    keys: &VaultKeys,
    venue_program: &Pubkey,
    vault_id: u64,
    max_base: u64,
    fee_bps: u16,
    predecessor: Option<Pubkey>,
) -> Instruction {
    let args = encode(&(vault_id, max_base, fee_bps, predecessor.map(|p| p.to_bytes())));

    instruction(
        "initialize_vault",
        args,
        vec![
            AccountMeta::new(keys.operator, true),
            AccountMeta::new(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new_readonly(keys.base_mint, false),
            AccountMeta::new(keys.claim_mint, false),
            AccountMeta::new(keys.base_reserve, false),
            AccountMeta::new_readonly(keys.fee_recipient, false),
            AccountMeta::new_readonly(*venue_program, false),
        ],
        true,
    )
}

// Reward tier 0 (none), no farm
pub fn build_register_pool_ix(
    keys: &VaultKeys,
    pool: &PoolKeys,
    fixed_rate_bps: u16,
    swap_tolerance: u64,
    override_existing: bool,
) -> Instruction {
    let args = encode(&(
        fixed_rate_bps,
        swap_tolerance,
        0u8,
        [0u8; 32],
        0u64,
        override_existing,
    ));

    instruction(
        "register_pool",
        args,
        vec![
            AccountMeta::new(keys.operator, true),
            AccountMeta::new(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new_readonly(pool.token_mint, false),
            AccountMeta::new(pool.pool, false),
            AccountMeta::new(pool.claim_mint, false),
            AccountMeta::new(pool.token_reserve, false),
        ],
        true,
    )
}

// Native SOL, native-mint vaults only
pub fn build_deposit_base_ix(keys: &VaultKeys, depositor: &Pubkey, lamports: u64) -> Instruction {
    instruction(
        "deposit_base",
        lamports.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(keys.claim_mint, false),
            AccountMeta::new(keys.base_reserve, false),
            AccountMeta::new(get_associated_token_address(depositor, &keys.claim_mint), false),
        ],
        true,
    )
}

pub fn build_deposit_wrapped_base_ix(keys: &VaultKeys, depositor: &Pubkey, amount: u64) -> Instruction {
    instruction(
        "deposit_wrapped_base",
        amount.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new_readonly(keys.base_mint, false),
            AccountMeta::new(keys.claim_mint, false),
            AccountMeta::new(keys.base_reserve, false),
            AccountMeta::new(get_associated_token_address(depositor, &keys.base_mint), false),
            AccountMeta::new(get_associated_token_address(depositor, &keys.claim_mint), false),
        ],
        true,
    )
}

pub fn build_deposit_token_ix(keys: &VaultKeys, pool: &PoolKeys, depositor: &Pubkey, amount: u64) -> Instruction {
    instruction(
        "deposit_token",
        amount.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new_readonly(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(pool.pool, false),
            AccountMeta::new_readonly(pool.token_mint, false),
            AccountMeta::new(pool.claim_mint, false),
            AccountMeta::new(pool.token_reserve, false),
            AccountMeta::new(get_associated_token_address(depositor, &pool.token_mint), false),
            AccountMeta::new(get_associated_token_address(depositor, &pool.claim_mint), false),
        ],
        true,
    )
}

// "begin_deployment" or "begin_settlement"
pub fn build_advance_phase_ix(keys: &VaultKeys, method: &str) -> Instruction {
    instruction(
        method,
        Vec::new(),
        vec![
            AccountMeta::new_readonly(keys.operator, true),
            AccountMeta::new(keys.vault, false),
        ],
        false,
    )
}

pub fn build_update_max_base_ix(keys: &VaultKeys, signer: &Pubkey, max_base: u64) -> Instruction {
    instruction(
        "update_max_base",
        max_base.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new(keys.vault, false),
        ],
        false,
    )
}

fn venue_accounts(venue: &VenueKeys) -> Vec<AccountMeta> {
    vec![
        AccountMeta::new_readonly(VENUE_PROGRAM_ID, false),
        AccountMeta::new_readonly(venue.pool_config, false),
        AccountMeta::new_readonly(venue.authority, false),
        AccountMeta::new(venue.lp_mint, false),
        AccountMeta::new_readonly(venue.mint_a, false),
        AccountMeta::new_readonly(venue.mint_b, false),
        AccountMeta::new(venue.vault_a, false),
        AccountMeta::new(venue.vault_b, false),
    ]
}

pub fn build_pair_liquidity_ix(
    keys: &VaultKeys,
    pool: &PoolKeys,
    venue: &VenueKeys,
    base_amount: u64,
    token_amount: u64,
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(keys.operator, true),
        AccountMeta::new(keys.vault, false),
        AccountMeta::new(pool.pool, false),
        AccountMeta::new(keys.authority, false),
        AccountMeta::new_readonly(keys.base_mint, false),
        AccountMeta::new_readonly(pool.token_mint, false),
        AccountMeta::new(keys.base_reserve, false),
        AccountMeta::new(pool.token_reserve, false),
    ];
    accounts.extend(venue_accounts(venue));
    accounts.push(AccountMeta::new(
        get_associated_token_address(&keys.authority, &venue.lp_mint),
        false,
    ));

    instruction(
        "pair_liquidity_pool",
        encode(&(base_amount, token_amount, 0u64, 0u64)),
        accounts,
        true,
    )
}

pub fn build_unpair_liquidity_ix(keys: &VaultKeys, pool: &PoolKeys, venue: &VenueKeys) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(keys.operator, true),
        AccountMeta::new(keys.vault, false),
        AccountMeta::new(pool.pool, false),
        AccountMeta::new(keys.authority, false),
        AccountMeta::new(keys.base_reserve, false),
        AccountMeta::new(pool.token_reserve, false),
    ];
    accounts.extend(venue_accounts(venue));
    accounts.push(AccountMeta::new(
        get_associated_token_address(&keys.authority, &venue.lp_mint),
        false,
    ));

    instruction("unpair_liquidity_pool", encode(&(0u64, 0u64)), accounts, true)
}

// No fee recipient passed (vault charges no fee)
pub fn build_withdraw_base_ix(keys: &VaultKeys, holder: &Pubkey, amount: u64) -> Instruction {
    instruction(
        "withdraw_base",
        amount.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*holder, true),
            AccountMeta::new(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new_readonly(keys.base_mint, false),
            AccountMeta::new(keys.claim_mint, false),
            AccountMeta::new(keys.base_reserve, false),
            AccountMeta::new(get_associated_token_address(holder, &keys.claim_mint), false),
            AccountMeta::new(get_associated_token_address(holder, &keys.base_mint), false),
            // Optional account left out
            AccountMeta::new_readonly(PROGRAM_ID, false),
        ],
        true,
    )
}

pub fn build_withdraw_token_ix(keys: &VaultKeys, pool: &PoolKeys, holder: &Pubkey, amount: u64) -> Instruction {
    instruction(
        "withdraw_token",
        amount.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*holder, true),
            AccountMeta::new_readonly(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(pool.pool, false),
            AccountMeta::new_readonly(pool.token_mint, false),
            AccountMeta::new(pool.claim_mint, false),
            AccountMeta::new(pool.token_reserve, false),
            AccountMeta::new(get_associated_token_address(holder, &pool.claim_mint), false),
            AccountMeta::new(get_associated_token_address(holder, &pool.token_mint), false),
        ],
        true,
    )
}

// Fee-free predecessor: the optional fee recipient is left out
pub fn build_migrate_base_position_ix(
    keys: &VaultKeys,
    successor: &VaultKeys,
    holder: &Pubkey,
    amount: u64,
) -> Instruction {
    instruction(
        "migrate_base_position",
        amount.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*holder, true),
            AccountMeta::new(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(keys.claim_mint, false),
            AccountMeta::new(keys.base_reserve, false),
            AccountMeta::new(get_associated_token_address(holder, &keys.claim_mint), false),
            AccountMeta::new_readonly(PROGRAM_ID, false),
            AccountMeta::new(successor.vault, false),
            AccountMeta::new_readonly(successor.authority, false),
            AccountMeta::new(successor.claim_mint, false),
            AccountMeta::new(successor.base_reserve, false),
            AccountMeta::new(get_associated_token_address(holder, &successor.claim_mint), false),
        ],
        true,
    )
}

pub fn build_migrate_token_position_ix(
    keys: &VaultKeys,
    pool: &PoolKeys,
    successor: &VaultKeys,
    successor_pool: &PoolKeys,
    holder: &Pubkey,
    amount: u64,
) -> Instruction {
    instruction(
        "migrate_token_position",
        amount.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*holder, true),
            AccountMeta::new_readonly(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(pool.pool, false),
            AccountMeta::new(pool.claim_mint, false),
            AccountMeta::new(pool.token_reserve, false),
            AccountMeta::new(get_associated_token_address(holder, &pool.claim_mint), false),
            AccountMeta::new_readonly(successor.vault, false),
            AccountMeta::new_readonly(successor.authority, false),
            AccountMeta::new(successor_pool.pool, false),
            AccountMeta::new(successor_pool.claim_mint, false),
            AccountMeta::new(successor_pool.token_reserve, false),
            AccountMeta::new(get_associated_token_address(holder, &successor_pool.claim_mint), false),
        ],
        true,
    )
}

pub fn build_migrate_vault_liquidity_ix(keys: &VaultKeys, successor: &Pubkey) -> Instruction {
    instruction(
        "migrate_vault_liquidity",
        Vec::new(),
        vec![
            AccountMeta::new(keys.operator, true),
            AccountMeta::new(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new_readonly(keys.base_mint, false),
            AccountMeta::new(keys.base_reserve, false),
            AccountMeta::new_readonly(*successor, false),
            AccountMeta::new(get_associated_token_address(successor, &keys.base_mint), false),
        ],
        true,
    )
}

pub fn build_migrate_pool_liquidity_ix(
    keys: &VaultKeys,
    pool: &PoolKeys,
    migrator: &Pubkey,
    successor: &Pubkey,
) -> Instruction {
    instruction(
        "migrate_pool_liquidity",
        Vec::new(),
        vec![
            AccountMeta::new(*migrator, true),
            AccountMeta::new_readonly(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(pool.pool, false),
            AccountMeta::new_readonly(pool.token_mint, false),
            AccountMeta::new(pool.token_reserve, false),
            AccountMeta::new_readonly(*successor, false),
            AccountMeta::new(get_associated_token_address(successor, &pool.token_mint), false),
        ],
        true,
    )
}

pub fn build_sweep_rewards_ix(
    keys: &VaultKeys,
    signer: &Pubkey,
    reward_account: &Pubkey,
    destination: &Pubkey,
) -> Instruction {
    instruction(
        "sweep_rewards",
        Vec::new(),
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new_readonly(keys.vault, false),
            AccountMeta::new_readonly(keys.authority, false),
            AccountMeta::new(*reward_account, false),
            AccountMeta::new_readonly(keys.fee_recipient, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        false,
    )
}

// ======================== VENUE INSTRUCTIONS ========================

pub fn build_initialize_venue_pool_ix(authority: &Pubkey, venue: &VenueKeys, fee_basis_points: u16) -> Instruction {
    build(
        VENUE_PROGRAM_ID,
        "initialize_pool",
        fee_basis_points.to_le_bytes().to_vec(),
        vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(venue.mint_a, false),
            AccountMeta::new_readonly(venue.mint_b, false),
            AccountMeta::new(venue.pool_config, false),
            AccountMeta::new_readonly(venue.authority, false),
            AccountMeta::new(venue.lp_mint, false),
            AccountMeta::new(venue.vault_a, false),
            AccountMeta::new(venue.vault_b, false),
        ],
        true,
    )
}

// Seeds the venue from a plain wallet holding ATAs of both mints
pub fn build_venue_deposit_ix(
    depositor: &Pubkey,
    venue: &VenueKeys,
    amount_a: u64,
    amount_b: u64,
    expiration: i64,
) -> Instruction {
    build(
        VENUE_PROGRAM_ID,
        "deposit_liquidity",
        encode(&(amount_a, amount_b, amount_a, amount_b, expiration)),
        vec![
            AccountMeta::new(*depositor, true),
            AccountMeta::new_readonly(venue.pool_config, false),
            AccountMeta::new_readonly(venue.authority, false),
            AccountMeta::new(venue.lp_mint, false),
            AccountMeta::new_readonly(venue.mint_a, false),
            AccountMeta::new_readonly(venue.mint_b, false),
            AccountMeta::new(get_associated_token_address(depositor, &venue.mint_a), false),
            AccountMeta::new(get_associated_token_address(depositor, &venue.mint_b), false),
            AccountMeta::new(get_associated_token_address(depositor, &venue.lp_mint), false),
            AccountMeta::new(venue.vault_a, false),
            AccountMeta::new(venue.vault_b, false),
        ],
        true,
    )
}

pub fn build_venue_swap_ix(
    swapper: &Pubkey,
    venue: &VenueKeys,
    a_for_b: bool,
    input_amount: u64,
    expiration: i64,
) -> Instruction {
    build(
        VENUE_PROGRAM_ID,
        "swap_tokens",
        encode(&(a_for_b, input_amount, 1u64, expiration)),
        vec![
            AccountMeta::new(*swapper, true),
            AccountMeta::new_readonly(venue.pool_config, false),
            AccountMeta::new_readonly(venue.authority, false),
            AccountMeta::new_readonly(venue.mint_a, false),
            AccountMeta::new_readonly(venue.mint_b, false),
            AccountMeta::new(get_associated_token_address(swapper, &venue.mint_a), false),
            AccountMeta::new(get_associated_token_address(swapper, &venue.mint_b), false),
            AccountMeta::new(venue.vault_a, false),
            AccountMeta::new(venue.vault_b, false),
        ],
        true,
    )
}

// "lock_pool" or "unlock_pool"
pub fn build_venue_lock_ix(authority: &Pubkey, venue: &VenueKeys, method: &str) -> Instruction {
    build(
        VENUE_PROGRAM_ID,
        method,
        Vec::new(),
        vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(venue.pool_config, false),
        ],
        false,
    )
}
