#![cfg(test)]
#![cfg(not(tarpaulin_include))]
use proptest::prelude::*;
use setup::{TestEnv, SECONDS_IN_ONE_MONTH, SECONDS_IN_ONE_WEEK};
use soroban_sdk::Address;

// Passo da simulação: avança o relógio e alguém chama claim_for
#[derive(Debug, Clone)]
struct Step {
    advance: u64,
    investor: usize,
}

fn deposits_strategy() -> impl Strategy<Value = Vec<i128>> {
    prop::collection::vec(1..1_000_000_000i128, 1..5)
}

fn steps_strategy() -> impl Strategy<Value = Vec<Step>> {
    prop::collection::vec(
        (0..SECONDS_IN_ONE_WEEK, 0..8usize).prop_map(|(advance, investor)| Step { advance, investor }),
        1..25,
    )
}

proptest! {
    // Cada caso sobe um Env completo; 25 sequências já cobrem bem
    #![proptest_config(ProptestConfig::with_cases(25))]

    #[test]
    fn fuzz_claims_never_exceed_pool(
        deposits in deposits_strategy(),
        pool in 1..1_000_000_000_000i128,
        steps in steps_strategy(),
    ) {
        let t = TestEnv::new();
        t.fund_pool(pool);

        let investors: Vec<Address> = deposits.iter().map(|_| t.investor()).collect();
        for (investor, amount) in investors.iter().zip(deposits.iter()) {
            t.client.deposit_for(&t.funder, investor, amount);
        }
        let total: i128 = deposits.iter().sum();
        prop_assert_eq!(t.client.total_deposited(), total);

        let mut last_claimed = vec![0i128; investors.len()];
        for step in steps {
            t.advance(step.advance);
            let idx = step.investor % investors.len();
            t.client.claim_for(&investors[idx]);

            // Monotonicidade e conservação a cada passo
            for (i, investor) in investors.iter().enumerate() {
                let claimed = t.client.claimed(investor);
                prop_assert!(claimed >= last_claimed[i]);
                last_claimed[i] = claimed;
            }
            let paid: i128 = last_claimed.iter().sum();
            prop_assert_eq!(paid + t.presale_balance(), pool);
            prop_assert_eq!(t.client.total_claimed(), paid);
        }

        // === INVARIANTE FINAL ===
        // Após a maturidade todos sacam; sobra só o arredondamento
        t.advance(SECONDS_IN_ONE_WEEK + SECONDS_IN_ONE_MONTH);
        for investor in investors.iter() {
            t.client.claim_for(investor);
        }

        for (investor, amount) in investors.iter().zip(deposits.iter()) {
            prop_assert_eq!(t.issued.balance(investor), pool * amount / total);
        }
        let remainder = t.presale_balance();
        prop_assert!(remainder >= 0);
        prop_assert!(remainder < investors.len() as i128, "Sobra maior que o arredondamento: {}", remainder);
    }
}
