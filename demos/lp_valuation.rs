//! Passive-LP valuation walkthrough: value a holder's proportional claim
//! on a pool as the price and the locked-liquidity mix change.
//!
//! Run with: `cargo run --example lp_valuation`

use primitive_types::U256;

use leverpool::accounting::PositionAccountant;
use leverpool::domain::{Address, Liquidity, Shares, SqrtPriceX96};
use leverpool::traits::{PoolState, PoolStateReader};

/// In-memory pool snapshot with a single LP.
struct DemoPool {
    state: PoolState,
    holder: Address,
    balance: Shares,
}

impl PoolStateReader for DemoPool {
    fn state(&self) -> PoolState {
        self.state
    }

    fn share_balance(&self, holder: Address) -> Shares {
        if holder == self.holder {
            self.balance
        } else {
            Shares::ZERO
        }
    }
}

fn main() {
    let holder = Address::from_bytes([0x11; 32]);
    let mut pool = DemoPool {
        state: PoolState {
            sqrt_price: SqrtPriceX96::one(),
            liquidity: Liquidity::new(1_000_000),
            locked_liquidity: Liquidity::ZERO,
            total_shares: Shares::new(1_000),
            initialized: true,
        },
        holder,
        balance: Shares::new(250),
    };

    let value = PositionAccountant::current_values(&pool, holder).expect("valued");
    println!("Idle pool, price 1.0:");
    println!("  liquidity={} amount0={} amount1={}", value.liquidity, value.amount0, value.amount1);

    // Leveraged positions open: part of the pool's liquidity locks, but it
    // still backs the LP's claim, so the valuation is unchanged.
    pool.state.liquidity = Liquidity::new(600_000);
    pool.state.locked_liquidity = Liquidity::new(400_000);
    let value = PositionAccountant::current_values(&pool, holder).expect("valued");
    println!("\n40% of liquidity locked against open positions:");
    println!("  liquidity={} amount0={} amount1={}", value.liquidity, value.amount0, value.amount1);

    // The market moves: price 4.0 shifts the reserve mix toward token1.
    pool.state.sqrt_price =
        SqrtPriceX96::new(SqrtPriceX96::q96() * U256::from(2u64)).expect("in range");
    let value = PositionAccountant::current_values(&pool, holder).expect("valued");
    println!("\nPrice moved to 4.0:");
    println!("  liquidity={} amount0={} amount1={}", value.liquidity, value.amount0, value.amount1);
}
