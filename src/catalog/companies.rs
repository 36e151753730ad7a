use super::Company;

const fn company(ticker: &'static str, name: &'static str, domain: &'static str) -> Company {
    Company {
        ticker,
        name,
        domain,
    }
}

pub static COMPANIES: &[Company] = &[
    // Ecosystems
    company("AAPL", "Apple", "apple.com"),
    company("GOOGL", "Google", "google.com"),
    company("MSFT", "Microsoft", "microsoft.com"),
    company("AMZN", "Amazon", "amazon.com"),
    company("META", "Meta", "meta.com"),
    company("TCEHY", "Tencent", "tencent.com"),
    company("BABA", "Alibaba", "alibaba.com"),
    // Membership / retail
    company("COST", "Costco", "costco.com"),
    company("WMT", "Walmart", "walmart.com"),
    company("TGT", "Target", "target.com"),
    company("SBUX", "Starbucks", "starbucks.com"),
    // Local commerce / logistics
    company("UBER", "Uber", "uber.com"),
    company("LYFT", "Lyft", "lyft.com"),
    company("DASH", "DoorDash", "doordash.com"),
    company("CART", "Instacart", "instacart.com"),
    company("MEITUAN", "Meituan", "meituan.com"),
    company("GRAB", "Grab", "grab.com"),
    // Geo prior candidates
    company("MCD", "McDonald's", "mcdonalds.com"),
    company("HD", "Home Depot", "homedepot.com"),
    company("BKNG", "Booking", "booking.com"),
    company("DAL", "Delta", "delta.com"),
    company("AAPL_EXTRA", "Apple (Services)", "apple.com"),
];
