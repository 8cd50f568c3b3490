use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{
            Claims, CustomerProfile, ForgotPasswordRequest, LoginRequest, LoginResponse,
            RegisterRequest, ResetPasswordRequest,
        },
        cart::{
            AddItemRequest, CartItemRef, CartItemsList, CartLineDto, CartProductDto, CartSnapshot,
            SyncCartRequest, UpdateItemRequest,
        },
        catalog::{
            CollectionList, CreateCollectionRequest, CreateVarietyRequest, UpdateCollectionRequest,
            UpdateVarietyRequest, VarietyList,
        },
        content::{
            ContactMessageList, ContactRequest, CreateFaqRequest, CreateSectionRequest, FaqList,
            SectionList, UpdateFaqRequest, UpdateSectionRequest,
        },
        products::{CreateProductRequest, ProductList, UpdateProductRequest},
    },
    models::{Collection, ContactMessage, Faq, Product, Section, Variety},
    response::{ApiResponse, Meta},
    routes::{auth, cart, catalog, content, health, params, products},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::register,
        auth::login,
        auth::me,
        auth::forgot_password,
        auth::reset_password,
        cart::get_cart,
        cart::line_items,
        cart::add_item,
        cart::update_item,
        cart::remove_item,
        cart::clear_cart,
        cart::sync_cart,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        catalog::list_varieties,
        catalog::get_variety,
        catalog::create_variety,
        catalog::update_variety,
        catalog::delete_variety,
        catalog::list_collections,
        catalog::get_collection,
        catalog::create_collection,
        catalog::update_collection,
        catalog::delete_collection,
        content::list_faqs,
        content::create_faq,
        content::update_faq,
        content::delete_faq,
        content::list_sections,
        content::create_section,
        content::update_section,
        content::delete_section,
        content::submit_contact,
        content::list_contact_messages,
        content::delete_contact_message
    ),
    components(
        schemas(
            Product,
            Variety,
            Collection,
            Faq,
            Section,
            ContactMessage,
            Claims,
            CustomerProfile,
            RegisterRequest,
            LoginRequest,
            LoginResponse,
            ForgotPasswordRequest,
            ResetPasswordRequest,
            AddItemRequest,
            UpdateItemRequest,
            SyncCartRequest,
            CartItemRef,
            CartItemsList,
            CartProductDto,
            CartLineDto,
            CartSnapshot,
            CreateProductRequest,
            UpdateProductRequest,
            ProductList,
            CreateVarietyRequest,
            UpdateVarietyRequest,
            VarietyList,
            CreateCollectionRequest,
            UpdateCollectionRequest,
            CollectionList,
            CreateFaqRequest,
            UpdateFaqRequest,
            FaqList,
            CreateSectionRequest,
            UpdateSectionRequest,
            SectionList,
            ContactRequest,
            ContactMessageList,
            params::Pagination,
            params::ProductQuery,
            Meta,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CartSnapshot>,
            ApiResponse<CartItemsList>,
            ApiResponse<VarietyList>,
            ApiResponse<CollectionList>,
            ApiResponse<FaqList>,
            ApiResponse<SectionList>,
            ApiResponse<ContactMessageList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Catalog", description = "Variety and collection endpoints"),
        (name = "Content", description = "FAQ, section and contact endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
