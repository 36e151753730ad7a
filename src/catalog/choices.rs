use super::Choice;

const fn choice(
    id: &'static str,
    label: &'static str,
    ticker: &'static str,
    complements: &'static [&'static str],
) -> Choice {
    Choice {
        id,
        label,
        ticker,
        complements,
    }
}

pub static ECOSYSTEMS: &[Choice] = &[
    choice("apple", "Apple", "AAPL", &["GOOGL", "MSFT", "AMZN"]),
    choice("google", "Google", "GOOGL", &["AAPL", "MSFT", "AMZN"]),
    choice("microsoft", "Microsoft", "MSFT", &["AAPL", "GOOGL", "AMZN"]),
    choice("amazon", "Amazon", "AMZN", &["AAPL", "GOOGL", "MSFT"]),
    choice("meta", "Meta", "META", &["AAPL", "GOOGL"]),
    choice("tencent", "Tencent", "TCEHY", &["BABA"]),
    choice("alibaba", "Alibaba", "BABA", &["TCEHY"]),
];

pub static MEMBERSHIPS: &[Choice] = &[
    choice("costco", "Costco", "COST", &["WMT", "TGT"]),
    choice("walmart", "Walmart/Sam's", "WMT", &["TGT"]),
    choice("target", "Target", "TGT", &["WMT"]),
    choice("prime", "Amazon Prime", "AMZN", &["AAPL"]),
    choice("starbucks", "Starbucks Rewards", "SBUX", &[]),
    choice("none-membership", "None", "AAPL_EXTRA", &[]),
];

pub static LOCAL_COMMERCE: &[Choice] = &[
    choice("uber", "Uber", "UBER", &["LYFT"]),
    choice("lyft", "Lyft", "LYFT", &["UBER"]),
    choice("doordash", "DoorDash", "DASH", &[]),
    choice("instacart", "Instacart", "CART", &[]),
    choice("meituan", "Meituan", "MEITUAN", &[]),
    choice("grab", "Grab", "GRAB", &[]),
    choice("none-local", "None", "MCD", &[]),
];
