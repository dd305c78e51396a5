use client::{
    context::counter::CounterContext,
    mollusk_helpers::{
        helper_trait::CounterTestHelper,
        new_counter_mollusk_context,
        utils::{
            create_counter_account,
            create_mock_user_account,
        },
    },
};
use mollusk_svm::result::Check;
use solana_address::Address;
use solana_sdk::rent::Rent;

#[test]
fn create_and_run_every_instruction() -> anyhow::Result<()> {
    let payer_mock = create_mock_user_account(Address::new_unique(), 1_000_000_000);
    let payer = payer_mock.0;
    let ctx = CounterContext::new(Address::new_unique());
    let mollusk = new_counter_mollusk_context(vec![payer_mock]);

    // Allocate the 4-byte account and hand it to the counter program, the way a client does
    // before the first instruction.
    let create = ctx.create_account(&payer, Rent::default().minimum_balance(4));
    assert!(mollusk.process_instruction(&create).program_result.is_ok());
    assert_eq!(mollusk.counter_data(&ctx.counter), vec![0, 0, 0, 0]);

    let steps = [
        (ctx.init(), [1, 0, 0, 0]),
        (ctx.double(), [2, 0, 0, 0]),
        (ctx.half(), [1, 0, 0, 0]),
        (ctx.add(5), [6, 0, 0, 0]),
        (ctx.subtract(3), [3, 0, 0, 0]),
    ];

    for (instruction, expected) in steps {
        mollusk.process_and_validate_instruction(
            &instruction,
            &[
                Check::success(),
                Check::account(&ctx.counter)
                    .data(&expected)
                    .owner(&counter::ID)
                    .build(),
            ],
        );
    }

    assert_eq!(mollusk.view_count(&ctx.counter), 3);

    Ok(())
}

#[test]
fn instruction_chain_matches_individual_instructions() {
    let ctx = CounterContext::new(Address::new_unique());
    let mollusk = new_counter_mollusk_context(vec![create_counter_account(ctx.counter, 0)]);

    assert!(mollusk
        .process_instruction_chain(&[
            ctx.init(),
            ctx.double(),
            ctx.half(),
            ctx.add(5),
            ctx.subtract(3),
        ])
        .program_result
        .is_ok());

    assert_eq!(mollusk.counter_data(&ctx.counter), vec![3, 0, 0, 0]);
}

#[test]
fn init_resets_an_existing_count() {
    let ctx = CounterContext::new(Address::new_unique());
    let mollusk = new_counter_mollusk_context(vec![create_counter_account(ctx.counter, 41)]);

    assert!(mollusk.process_instruction(&ctx.init()).program_result.is_ok());
    assert_eq!(mollusk.view_count(&ctx.counter), 1);
}

#[test]
fn separate_counters_are_independent() {
    let first = CounterContext::new(Address::new_unique());
    let second = CounterContext::new(Address::new_unique());
    let mollusk = new_counter_mollusk_context(vec![
        create_counter_account(first.counter, 10),
        create_counter_account(second.counter, 20),
    ]);

    assert!(mollusk
        .process_instruction_chain(&[first.double(), second.half()])
        .program_result
        .is_ok());

    assert_eq!(mollusk.view_count(&first.counter), 20);
    assert_eq!(mollusk.view_count(&second.counter), 10);
}
