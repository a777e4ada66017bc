use actor_framework::tracing::setup_tracing;
use food_market::model::{CustomerCreate, MenuCreate, OrderBody, OrderLineRequest, SellerCreate};
use food_market::runtime::MarketSystem;
use food_market::MarketConfig;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    info!("Starting food market");

    let system = MarketSystem::new(MarketConfig::from_env());

    let seller = system
        .register_seller(SellerCreate {
            name: "Warung Bu Tini".to_string(),
            address: "Jl. Malioboro 12, Yogyakarta".to_string(),
            phone_number: "+62 812 0000 1111".to_string(),
            open_hour: 8,
            closed_hour: 21,
        })
        .await?;
    info!(seller_id = %seller.seller_id, "Seller registered");

    let customer = system
        .register_customer(CustomerCreate {
            name: "Sari".to_string(),
            address: "Jl. Kaliurang KM 5, Sleman".to_string(),
        })
        .await?;
    info!(customer_id = %customer.customer_id, "Customer registered");

    let menu = system
        .publish_menu(MenuCreate {
            seller_id: seller.seller_id,
            name: "Nasi Goreng".to_string(),
            description: "Fried rice with egg".to_string(),
            price: 12.5,
            calorie: 650.0,
            image_url: "https://example.com/nasi-goreng.jpg".to_string(),
        })
        .await?;
    info!(menu_id = %menu.menu_id, "Menu published");

    let span = tracing::info_span!("order_processing");
    let order = async {
        let order = system
            .place_order(OrderBody {
                customer_id: customer.customer_id,
                seller_id: seller.seller_id,
                menus: vec![OrderLineRequest::new(menu.menu_id, 3)],
            })
            .await?;
        info!(order_id = %order.order_id, total_price = order.total_price, "Order placed");

        system.accept_order(order.order_id).await
    }
    .instrument(span)
    .await?;

    info!(order_id = %order.order_id, status = %order.status, "Order accepted");

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
