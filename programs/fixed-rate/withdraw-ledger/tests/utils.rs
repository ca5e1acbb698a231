// LiteSVM helpers: the vault program drives a cycle to settlement and hands
// its reserves to the ledger under test
//
// Both programs load from target/deploy. Build them first, then run the
// ignored tests:
//
//   cargo build-sbf
//   cargo test -- --ignored

#![allow(dead_code)]

use anchor_lang::AnchorSerialize;
use litesvm::{types::TransactionResult, LiteSVM};
use litesvm_token::{get_spl_account, CreateAssociatedTokenAccount, MintTo};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;
use spl_associated_token_account::get_associated_token_address;

pub const LEDGER_PROGRAM_ID: Pubkey = Pubkey::new_from_array(withdraw_ledger::ID.to_bytes());
pub const VAULT_PROGRAM_ID: Pubkey = Pubkey::new_from_array(fixed_rate_vault::ID.to_bytes());

pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;

pub const DECIMALS: u8 = 9;

const DEPLOY_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../../target/deploy");

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

// Vault and ledger loaded
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();

    for (id, name) in [
        (VAULT_PROGRAM_ID, "fixed_rate_vault.so"),
        (LEDGER_PROGRAM_ID, "withdraw_ledger.so"),
    ] {
        let path = format!("{}/{}", DEPLOY_DIR, name);
        let bytes = std::fs::read(&path)
            .unwrap_or_else(|e| panic!("{} missing ({}): run `cargo build-sbf` first", path, e));
        svm.add_program(id, &bytes).expect("Failed to add program");
    }

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

pub fn depositor_with(svm: &mut LiteSVM, mint_authority: &Keypair, mint: &Pubkey, amount: u64) -> Keypair {
    let depositor = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);
    fund(svm, mint_authority, &depositor, mint, amount);
    depositor
}

fn programs() -> [AccountMeta; 3] {
    [
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

fn instruction(program_id: Pubkey, method: &str, args: Vec<u8>, accounts: Vec<AccountMeta>) -> Instruction {
    let mut data = anchor_discriminator(method).to_vec();
    data.extend(args);
    Instruction {
        program_id,
        accounts,
        data,
    }
}

// ======================== VAULT SIDE ========================

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
        let vault = Pubkey::find_program_address(
            &[b"vault", operator.as_ref(), &vault_id.to_le_bytes()],
            &VAULT_PROGRAM_ID,
        )
        .0;
        let authority = Pubkey::find_program_address(&[b"vault_authority", vault.as_ref()], &VAULT_PROGRAM_ID).0;
        Self {
            operator: *operator,
            vault,
            authority,
            base_mint: *base_mint,
            claim_mint: Pubkey::find_program_address(&[b"claim_mint", vault.as_ref()], &VAULT_PROGRAM_ID).0,
            base_reserve: get_associated_token_address(&authority, base_mint),
            fee_recipient: *fee_recipient,
        }
    }
}

pub fn build_initialize_vault_ix(keys: &VaultKeys, vault_id: u64, max_base: u64) -> Instruction {
    let args = encode(&(vault_id, max_base, 0u16, None::<[u8; 32]>));

    let mut accounts = vec![
        AccountMeta::new(keys.operator, true),
        AccountMeta::new(keys.vault, false),
        AccountMeta::new_readonly(keys.authority, false),
        AccountMeta::new_readonly(keys.base_mint, false),
        AccountMeta::new(keys.claim_mint, false),
        AccountMeta::new(keys.base_reserve, false),
        AccountMeta::new_readonly(keys.fee_recipient, false),
        // Stored only; pairing is not exercised here
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
    ];
    accounts.extend(programs());

    instruction(VAULT_PROGRAM_ID, "initialize_vault", args, accounts)
}

pub fn build_deposit_wrapped_base_ix(keys: &VaultKeys, depositor: &Pubkey, amount: u64) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*depositor, true),
        AccountMeta::new(keys.vault, false),
        AccountMeta::new_readonly(keys.authority, false),
        AccountMeta::new_readonly(keys.base_mint, false),
        AccountMeta::new(keys.claim_mint, false),
        AccountMeta::new(keys.base_reserve, false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.base_mint), false),
        AccountMeta::new(get_associated_token_address(depositor, &keys.claim_mint), false),
    ];
    accounts.extend(programs());

    instruction(VAULT_PROGRAM_ID, "deposit_wrapped_base", amount.to_le_bytes().to_vec(), accounts)
}

pub struct PoolKeys {
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    pub claim_mint: Pubkey,
    pub token_reserve: Pubkey,
}

impl PoolKeys {
    pub fn new(vault: &VaultKeys, token_mint: &Pubkey) -> Self {
        let pool = Pubkey::find_program_address(
            &[b"pool", vault.vault.as_ref(), token_mint.as_ref()],
            &VAULT_PROGRAM_ID,
        )
        .0;
        Self {
            pool,
            token_mint: *token_mint,
            claim_mint: Pubkey::find_program_address(&[b"claim_mint", pool.as_ref()], &VAULT_PROGRAM_ID).0,
            token_reserve: get_associated_token_address(&vault.authority, token_mint),
        }
    }
}

// 1% fixed rate, no reward tier
pub fn build_register_pool_ix(keys: &VaultKeys, pool: &PoolKeys) -> Instruction {
    let args = encode(&(100u16, 10u64, 0u8, [0u8; 32], 0u64, false));

    let mut accounts = vec![
        AccountMeta::new(keys.operator, true),
        AccountMeta::new(keys.vault, false),
        AccountMeta::new_readonly(keys.authority, false),
        AccountMeta::new_readonly(pool.token_mint, false),
        AccountMeta::new(pool.pool, false),
        AccountMeta::new(pool.claim_mint, false),
        AccountMeta::new(pool.token_reserve, false),
    ];
    accounts.extend(programs());

    instruction(VAULT_PROGRAM_ID, "register_pool", args, accounts)
}

pub fn build_deposit_token_ix(keys: &VaultKeys, pool: &PoolKeys, depositor: &Pubkey, amount: u64) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*depositor, true),
        AccountMeta::new_readonly(keys.vault, false),
        AccountMeta::new_readonly(keys.authority, false),
        AccountMeta::new(pool.pool, false),
        AccountMeta::new_readonly(pool.token_mint, false),
        AccountMeta::new(pool.claim_mint, false),
        AccountMeta::new(pool.token_reserve, false),
        AccountMeta::new(get_associated_token_address(depositor, &pool.token_mint), false),
        AccountMeta::new(get_associated_token_address(depositor, &pool.claim_mint), false),
    ];
    accounts.extend(programs());

    instruction(VAULT_PROGRAM_ID, "deposit_token", amount.to_le_bytes().to_vec(), accounts)
}

pub fn build_advance_phase_ix(keys: &VaultKeys, method: &str) -> Instruction {
    instruction(
        VAULT_PROGRAM_ID,
        method,
        Vec::new(),
        vec![
            AccountMeta::new_readonly(keys.operator, true),
            AccountMeta::new(keys.vault, false),
        ],
    )
}

pub fn build_migrate_vault_liquidity_ix(keys: &VaultKeys, successor: &Pubkey) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(keys.operator, true),
        AccountMeta::new(keys.vault, false),
        AccountMeta::new_readonly(keys.authority, false),
        AccountMeta::new_readonly(keys.base_mint, false),
        AccountMeta::new(keys.base_reserve, false),
        AccountMeta::new_readonly(*successor, false),
        AccountMeta::new(get_associated_token_address(successor, &keys.base_mint), false),
    ];
    accounts.extend(programs());

    instruction(VAULT_PROGRAM_ID, "migrate_vault_liquidity", Vec::new(), accounts)
}

pub fn build_migrate_pool_liquidity_ix(keys: &VaultKeys, pool: &PoolKeys, successor: &Pubkey) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(keys.operator, true),
        AccountMeta::new_readonly(keys.vault, false),
        AccountMeta::new_readonly(keys.authority, false),
        AccountMeta::new(pool.pool, false),
        AccountMeta::new_readonly(pool.token_mint, false),
        AccountMeta::new(pool.token_reserve, false),
        AccountMeta::new_readonly(*successor, false),
        AccountMeta::new(get_associated_token_address(successor, &pool.token_mint), false),
    ];
    accounts.extend(programs());

    instruction(VAULT_PROGRAM_ID, "migrate_pool_liquidity", Vec::new(), accounts)
}

// ======================== LEDGER SIDE ========================

pub struct LedgerKeys {
    pub guardian: Pubkey,
    pub ledger: Pubkey,
    pub authority: Pubkey,
}

impl LedgerKeys {
    pub fn new(guardian: &Pubkey, vault: &Pubkey) -> Self {
        let ledger = Pubkey::find_program_address(
            &[b"ledger", guardian.as_ref(), vault.as_ref()],
            &LEDGER_PROGRAM_ID,
        )
        .0;
        Self {
            guardian: *guardian,
            ledger,
            authority: Pubkey::find_program_address(&[b"ledger_authority", ledger.as_ref()], &LEDGER_PROGRAM_ID).0,
        }
    }

    pub fn claim_pool(&self, source: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(
            &[b"claim_pool", self.ledger.as_ref(), source.as_ref()],
            &LEDGER_PROGRAM_ID,
        )
        .0
    }
}

pub fn build_initialize_ledger_ix(ledger: &LedgerKeys, vault: &Pubkey, pools: &[Pubkey]) -> Instruction {
    let pools: Vec<[u8; 32]> = pools.iter().map(|p| p.to_bytes()).collect();
    let args = encode(&pools);

    instruction(
        LEDGER_PROGRAM_ID,
        "initialize_ledger",
        args,
        vec![
            AccountMeta::new(ledger.guardian, true),
            AccountMeta::new_readonly(*vault, false),
            AccountMeta::new(ledger.ledger, false),
            AccountMeta::new_readonly(ledger.authority, false),
            AccountMeta::new_readonly(system_program, false),
        ],
    )
}

pub fn build_open_vault_claims_ix(ledger: &LedgerKeys, vault: &VaultKeys, payer: &Pubkey) -> Instruction {
    instruction(
        LEDGER_PROGRAM_ID,
        "open_vault_claims",
        Vec::new(),
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(ledger.ledger, false),
            AccountMeta::new_readonly(ledger.authority, false),
            AccountMeta::new_readonly(vault.vault, false),
            AccountMeta::new_readonly(vault.base_mint, false),
            AccountMeta::new_readonly(vault.claim_mint, false),
            AccountMeta::new_readonly(get_associated_token_address(&ledger.authority, &vault.base_mint), false),
            AccountMeta::new(ledger.claim_pool(&vault.vault), false),
            AccountMeta::new_readonly(system_program, false),
        ],
    )
}

pub fn build_withdraw_base_ix(ledger: &LedgerKeys, vault: &VaultKeys, holder: &Pubkey) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*holder, true),
        AccountMeta::new_readonly(ledger.ledger, false),
        AccountMeta::new_readonly(ledger.authority, false),
        AccountMeta::new(ledger.claim_pool(&vault.vault), false),
        AccountMeta::new(vault.claim_mint, false),
        AccountMeta::new_readonly(vault.base_mint, false),
        AccountMeta::new(get_associated_token_address(&ledger.authority, &vault.base_mint), false),
        AccountMeta::new(get_associated_token_address(holder, &vault.claim_mint), false),
        AccountMeta::new(get_associated_token_address(holder, &vault.base_mint), false),
    ];
    accounts.extend(programs());

    instruction(LEDGER_PROGRAM_ID, "withdraw_base", Vec::new(), accounts)
}

pub fn build_open_pool_claims_ix(ledger: &LedgerKeys, pool: &PoolKeys, payer: &Pubkey) -> Instruction {
    instruction(
        LEDGER_PROGRAM_ID,
        "open_pool_claims",
        Vec::new(),
        vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new(ledger.ledger, false),
            AccountMeta::new_readonly(ledger.authority, false),
            AccountMeta::new_readonly(pool.pool, false),
            AccountMeta::new_readonly(pool.token_mint, false),
            AccountMeta::new_readonly(pool.claim_mint, false),
            AccountMeta::new_readonly(get_associated_token_address(&ledger.authority, &pool.token_mint), false),
            AccountMeta::new(ledger.claim_pool(&pool.pool), false),
            AccountMeta::new_readonly(system_program, false),
        ],
    )
}

pub fn build_withdraw_token_ix(ledger: &LedgerKeys, pool: &PoolKeys, holder: &Pubkey) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new(*holder, true),
        AccountMeta::new_readonly(ledger.ledger, false),
        AccountMeta::new_readonly(ledger.authority, false),
        AccountMeta::new(ledger.claim_pool(&pool.pool), false),
        AccountMeta::new(pool.claim_mint, false),
        AccountMeta::new_readonly(pool.token_mint, false),
        AccountMeta::new(get_associated_token_address(&ledger.authority, &pool.token_mint), false),
        AccountMeta::new(get_associated_token_address(holder, &pool.claim_mint), false),
        AccountMeta::new(get_associated_token_address(holder, &pool.token_mint), false),
    ];
    accounts.extend(programs());

    instruction(LEDGER_PROGRAM_ID, "withdraw_token", Vec::new(), accounts)
}

// Sweeps the base escrow and freezes its claim pool
pub fn build_rescue_tokens_ix(
    ledger: &LedgerKeys,
    vault: &VaultKeys,
    signer: &Pubkey,
    destination: &Pubkey,
) -> Instruction {
    let escrow = get_associated_token_address(&ledger.authority, &vault.base_mint);
    build_rescue_account_ix(ledger, &escrow, Some(&ledger.claim_pool(&vault.vault)), signer, destination)
}

// Any authority-held token account; `claim_pool` None leaves the optional out
pub fn build_rescue_account_ix(
    ledger: &LedgerKeys,
    source: &Pubkey,
    claim_pool: Option<&Pubkey>,
    signer: &Pubkey,
    destination: &Pubkey,
) -> Instruction {
    let claim_pool = match claim_pool {
        Some(claim_pool) => AccountMeta::new(*claim_pool, false),
        None => AccountMeta::new_readonly(LEDGER_PROGRAM_ID, false),
    };

    instruction(
        LEDGER_PROGRAM_ID,
        "rescue_tokens",
        Vec::new(),
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new_readonly(ledger.ledger, false),
            AccountMeta::new_readonly(ledger.authority, false),
            AccountMeta::new(*source, false),
            claim_pool,
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
    )
}

pub fn build_rescue_native_ix(ledger: &LedgerKeys, signer: &Pubkey, destination: &Pubkey) -> Instruction {
    instruction(
        LEDGER_PROGRAM_ID,
        "rescue_native",
        Vec::new(),
        vec![
            AccountMeta::new_readonly(*signer, true),
            AccountMeta::new_readonly(ledger.ledger, false),
            AccountMeta::new(ledger.authority, false),
            AccountMeta::new(*destination, false),
            AccountMeta::new_readonly(system_program, false),
        ],
    )
}
