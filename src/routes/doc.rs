use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    cafe::Checkout,
    dto::{
        InputValue,
        menu::{CreateMenuItemRequest, DeleteOutcome, MenuList, UpdateMenuItemRequest},
        orders::{AddLineRequest, CancelledOrder, OrderList, StartOrderRequest},
    },
    models::{
        Analytics, Category, CustomerPreference, CustomerTier, MenuItem, Order, OrderLine,
        SessionState,
    },
    recommend::{Basis, Recommendation},
    response::{ApiResponse, Meta},
    routes::{customers, health, menu, orders},
    session::OrderSession,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        menu::list_menu,
        menu::get_menu_item,
        menu::create_menu_item,
        menu::update_menu_item,
        menu::delete_menu_item,
        orders::list_orders,
        orders::start_order,
        orders::get_session,
        orders::cancel_order,
        orders::add_line,
        orders::session_recommendation,
        orders::finish_order,
        customers::recommend,
        customers::customer_preference,
        customers::analytics
    ),
    components(
        schemas(
            Category,
            MenuItem,
            OrderLine,
            Order,
            CustomerTier,
            CustomerPreference,
            SessionState,
            OrderSession,
            Checkout,
            Analytics,
            Basis,
            Recommendation,
            InputValue,
            CreateMenuItemRequest,
            UpdateMenuItemRequest,
            DeleteOutcome,
            MenuList,
            StartOrderRequest,
            AddLineRequest,
            OrderList,
            CancelledOrder,
            Meta,
            ApiResponse<MenuItem>,
            ApiResponse<MenuList>,
            ApiResponse<OrderSession>,
            ApiResponse<Checkout>,
            ApiResponse<OrderList>,
            ApiResponse<CancelledOrder>,
            ApiResponse<Recommendation>,
            ApiResponse<Analytics>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Menu", description = "Menu administration and customer menu"),
        (name = "Orders", description = "Order sessions and order history"),
        (name = "Customers", description = "Recommendations and stored preferences"),
        (name = "Analytics", description = "Business analytics"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
