//! OpenAPI 3 description of the HTTP surface.
//!
//! Component schemas come from the wire types' `JsonSchema` derives; the
//! path table is written out here.

use schemars::gen::SchemaSettings;
use serde_json::{json, Value};

use crate::errors::ErrorBody;
use crate::models::{
    sample_request, HealthResponse, PredictionRequest, PredictionResult, RootResponse, SERVICE_NAME,
};

pub fn openapi_document() -> Value {
    let mut generator = SchemaSettings::openapi3().into_generator();
    let request = generator.subschema_for::<PredictionRequest>();
    let result = generator.subschema_for::<PredictionResult>();
    let root = generator.subschema_for::<RootResponse>();
    let health = generator.subschema_for::<HealthResponse>();
    let error = generator.subschema_for::<ErrorBody>();
    let schemas = generator.take_definitions();

    let error_response = |description: &str| {
        json!({
            "description": description,
            "content": { "application/json": { "schema": error } },
        })
    };

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": SERVICE_NAME,
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        },
        "paths": {
            "/": {
                "get": {
                    "summary": "Service status",
                    "responses": {
                        "200": {
                            "description": "Service is running",
                            "content": { "application/json": { "schema": root } },
                        },
                    },
                },
            },
            "/health": {
                "get": {
                    "summary": "Health check",
                    "responses": {
                        "200": {
                            "description": "Service is healthy",
                            "content": { "application/json": { "schema": health } },
                        },
                    },
                },
            },
            "/predict": {
                "post": {
                    "summary": "Predict diabetes risk",
                    "description": "Features, in order: pregnancies, glucose, blood pressure, \
                        skin thickness, insulin, BMI, diabetes pedigree function, age.",
                    "requestBody": {
                        "required": true,
                        "content": {
                            "application/json": {
                                "schema": request,
                                "example": sample_request(),
                            },
                        },
                    },
                    "responses": {
                        "200": {
                            "description": "Risk classification",
                            "content": { "application/json": { "schema": result } },
                        },
                        "400": error_response("Wrong number of features"),
                        "422": error_response("Body is not an object with a `features` array"),
                        "500": error_response("Model not loaded, or the prediction failed"),
                    },
                },
            },
        },
        "components": { "schemas": schemas },
    })
}
