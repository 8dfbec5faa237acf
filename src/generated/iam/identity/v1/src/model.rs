// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![allow(rustdoc::redundant_explicit_links)]
#![allow(rustdoc::broken_intra_doc_links)]

use std::collections::HashMap;

/// Context with key properties for problem determination.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ResponseContext {
    /// The transaction ID of the inbound REST request.
    pub transaction_id: Option<String>,
    /// The operation of the inbound REST request.
    pub operation: Option<String>,
    /// The user agent of the inbound REST request.
    pub user_agent: Option<String>,
    /// The URL of that cluster.
    pub url: Option<String>,
    /// The instance ID of the server instance processing the request.
    pub instance_id: Option<String>,
    /// The thread ID of the server instance processing the request.
    pub thread_id: Option<String>,
    /// The host of the server instance processing the request.
    pub host: Option<String>,
    /// The start time of the request.
    pub start_time: Option<String>,
    /// The finish time of the request.
    pub end_time: Option<String>,
    /// The elapsed time in msec.
    pub elapsed_time: Option<String>,
    /// The cluster name.
    pub cluster_name: Option<String>,
}

impl ResponseContext {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Response body format for an entity history record.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct EntityHistoryRecord {
    /// Timestamp when the action was triggered.
    pub timestamp: Option<String>,
    /// IAM ID of the identity which triggered the action.
    pub iam_id: Option<String>,
    /// Account of the identity which triggered the action.
    pub iam_id_account: Option<String>,
    /// Action of the history entry.
    pub action: Option<String>,
    /// Params of the history entry.
    pub params: Option<Vec<String>>,
    /// Message which summarizes the executed action.
    pub message: Option<String>,
}

impl EntityHistoryRecord {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Response body format for API key V1 REST requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApiKey {
    pub context: Option<ResponseContext>,
    /// Unique identifier of this API Key.
    pub id: Option<String>,
    /// Version of the API Key details object. Pass this value as the
    /// `If-Match` header when updating the API key.
    pub entity_tag: Option<String>,
    /// Cloud Resource Name of the item.
    pub crn: Option<String>,
    /// The API key cannot be changed if set to true.
    pub locked: Option<bool>,
    /// If set contains a date time string of the creation date.
    pub created_at: Option<String>,
    /// IAM ID of the user or service which created the API key.
    pub created_by: Option<String>,
    /// If set contains a date time string of the last modification date.
    pub modified_at: Option<String>,
    /// Name of the API key.
    pub name: Option<String>,
    /// The optional description of the API key.
    pub description: Option<String>,
    /// The `iam_id` that this API key authenticates.
    pub iam_id: Option<String>,
    /// ID of the account that this API key authenticates for.
    pub account_id: Option<String>,
    /// The API key value.
    ///
    /// Only returned when the key is created, or when the key value was stored.
    pub apikey: Option<String>,
    /// History of the API key.
    pub history: Option<Vec<EntityHistoryRecord>>,
}

impl ApiKey {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Response body format for the List API keys V1 REST request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ApiKeyList {
    pub context: Option<ResponseContext>,
    /// The offset of the current page.
    pub offset: Option<i64>,
    /// Optional size of a single page.
    pub limit: Option<i64>,
    /// Link to the first page.
    pub first: Option<String>,
    /// Link to the previous available page.
    pub previous: Option<String>,
    /// Link to the next available page.
    pub next: Option<String>,
    /// List of API keys based on the query parameters and the page size.
    pub apikeys: Option<Vec<ApiKey>>,
}

impl ApiKeyList {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Response body format for service ID V1 REST requests.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceId {
    pub context: Option<ResponseContext>,
    /// Unique identifier of this Service ID.
    pub id: Option<String>,
    /// Cloud wide identifier for identities of this service ID.
    pub iam_id: Option<String>,
    /// Version of the service ID details object. Pass this value as the
    /// `If-Match` header when updating the service ID.
    pub entity_tag: Option<String>,
    /// Cloud Resource Name of the item.
    pub crn: Option<String>,
    /// The service ID cannot be changed if set to true.
    pub locked: Option<bool>,
    /// If set contains a date time string of the creation date.
    pub created_at: Option<String>,
    /// If set contains a date time string of the last modification date.
    pub modified_at: Option<String>,
    /// ID of the account the service ID belongs to.
    pub account_id: Option<String>,
    /// Name of the Service Id.
    pub name: Option<String>,
    /// The optional description of the Service Id.
    pub description: Option<String>,
    /// Optional list of CRNs (string array) which point to the services
    /// connected to the service ID.
    pub unique_instance_crns: Option<Vec<String>>,
    /// History of the Service ID.
    pub history: Option<Vec<EntityHistoryRecord>>,
    /// The API key created together with the service ID, if any.
    pub apikey: Option<ApiKey>,
}

impl ServiceId {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Response body format for the list service ID V1 REST request.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceIdList {
    pub context: Option<ResponseContext>,
    /// The offset of the current page.
    pub offset: Option<i64>,
    /// Optional size of a single page.
    pub limit: Option<i64>,
    /// Link to the first page.
    pub first: Option<String>,
    /// Link to the previous available page.
    pub previous: Option<String>,
    /// Link to the next available page.
    pub next: Option<String>,
    /// List of service IDs based on the query parameters and the page size.
    pub serviceids: Option<Vec<ServiceId>>,
}

impl ServiceIdList {
    pub fn new() -> Self {
        std::default::Default::default()
    }
}

/// Parameters for the API key created together with a service ID.
#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
#[non_exhaustive]
pub struct CreateApiKeyRequest {
    /// Name of the API key.
    pub name: Option<String>,
    /// The optional description of the API key.
    pub description: Option<String>,
    /// The `iam_id` that this API key authenticates.
    pub iam_id: Option<String>,
    /// The account ID of the API key.
    pub account_id: Option<String>,
    /// You can optionally pass the API key value for this API key.
    pub apikey: Option<String>,
    /// Send true or false to set whether the API key value is retrievable in
    /// the future by using the Get details of an API key request.
    pub store_value: Option<bool>,
}

impl CreateApiKeyRequest {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    /// Sets the value of [name][CreateApiKeyRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    /// Sets the value of [description][CreateApiKeyRequest::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    /// Sets the value of [iam_id][CreateApiKeyRequest::iam_id].
    pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
        self.iam_id = Some(v.into());
        self
    }

    /// Sets the value of [account_id][CreateApiKeyRequest::account_id].
    pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    /// Sets the value of [apikey][CreateApiKeyRequest::apikey].
    pub fn set_apikey<T: Into<String>>(mut self, v: T) -> Self {
        self.apikey = Some(v.into());
        self
    }

    /// Sets the value of [store_value][CreateApiKeyRequest::store_value].
    pub fn set_store_value<T: Into<bool>>(mut self, v: T) -> Self {
        self.store_value = Some(v.into());
        self
    }
}

macro_rules! query_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $value:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
        #[non_exhaustive]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $value)]
                $variant,
            )*
        }

        impl $name {
            /// Gets the string value of the enum.
            pub fn value(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.value())
            }
        }

        impl gaxi::query_parameter::QueryValue for $name {
            fn to_query_value(&self) -> String {
                self.value().to_string()
            }
        }
    };
}

query_enum!(
    /// Optional parameter to define the scope of the queried API keys.
    ListApiKeysScope {
        /// Only the API keys of the entity.
        Entity => "entity",
        /// All the API keys in the account.
        Account => "account",
    }
);

query_enum!(
    /// Optional parameter to filter the type of the queried API keys.
    ListApiKeysType {
        User => "user",
        Serviceid => "serviceid",
    }
);

query_enum!(
    /// Optional sort order for the list of API keys.
    ListApiKeysOrder {
        Asc => "asc",
        Desc => "desc",
    }
);

query_enum!(
    /// Optional sort order for the list of service IDs.
    ListServiceIdsOrder {
        Asc => "asc",
        Desc => "desc",
    }
);

/// The options for [list_api_keys][crate::client::IamIdentity::list_api_keys].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListApiKeysOptions {
    /// Account ID of the API keys to query.
    ///
    /// If a service IAM ID is specified in `iam_id` then `account_id` must
    /// match the account of the IAM ID. If a user IAM ID is specified in
    /// `iam_id` then `account_id` must match the account of the Authorization
    /// token.
    pub account_id: Option<String>,
    /// IAM ID of the API keys to be queried.
    pub iam_id: Option<String>,
    /// Optional size of a single page. Default is 20 items per page.
    pub pagesize: Option<i64>,
    /// Optional prev or next page token returned from a previous query
    /// execution.
    pub pagetoken: Option<String>,
    pub scope: Option<ListApiKeysScope>,
    pub r#type: Option<ListApiKeysType>,
    /// Optional sort property, valid values are `name`, `description`,
    /// `created_at` and `created_by`.
    pub sort: Option<String>,
    pub order: Option<ListApiKeysOrder>,
    /// Defines if the entity history is included in the response.
    pub include_history: Option<bool>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl ListApiKeysOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
        self.iam_id = Some(v.into());
        self
    }

    pub fn set_pagesize<T: Into<i64>>(mut self, v: T) -> Self {
        self.pagesize = Some(v.into());
        self
    }

    pub fn set_pagetoken<T: Into<String>>(mut self, v: T) -> Self {
        self.pagetoken = Some(v.into());
        self
    }

    pub fn set_scope(mut self, v: ListApiKeysScope) -> Self {
        self.scope = Some(v);
        self
    }

    pub fn set_type(mut self, v: ListApiKeysType) -> Self {
        self.r#type = Some(v);
        self
    }

    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    pub fn set_order(mut self, v: ListApiKeysOrder) -> Self {
        self.order = Some(v);
        self
    }

    pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_history = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for [create_api_key][crate::client::IamIdentity::create_api_key].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateApiKeyOptions {
    /// Name of the API key. The name is not checked for uniqueness.
    pub name: Option<String>,
    /// The `iam_id` that this API key authenticates.
    pub iam_id: Option<String>,
    /// The optional description of the API key.
    pub description: Option<String>,
    /// The account ID of the API key.
    pub account_id: Option<String>,
    /// You can optionally pass the API key value for this API key. If passed,
    /// it must be at least 32 and at most 128 characters long.
    pub apikey: Option<String>,
    /// Send true or false to set whether the API key value is retrievable in
    /// the future.
    pub store_value: Option<bool>,
    /// Indicates if the API key is locked for further write operations.
    /// The `Entity-Lock` header, `"true"` or `"false"`.
    pub entity_lock: Option<String>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl CreateApiKeyOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_iam_id<T: Into<String>>(mut self, v: T) -> Self {
        self.iam_id = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    pub fn set_apikey<T: Into<String>>(mut self, v: T) -> Self {
        self.apikey = Some(v.into());
        self
    }

    pub fn set_store_value<T: Into<bool>>(mut self, v: T) -> Self {
        self.store_value = Some(v.into());
        self
    }

    pub fn set_entity_lock<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_lock = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for [get_api_keys_details][crate::client::IamIdentity::get_api_keys_details].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetApiKeysDetailsOptions {
    /// API key value, sent in the `IAM-ApiKey` header.
    pub iam_api_key: Option<String>,
    /// Defines if the entity history is included in the response.
    pub include_history: Option<bool>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetApiKeysDetailsOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_iam_api_key<T: Into<String>>(mut self, v: T) -> Self {
        self.iam_api_key = Some(v.into());
        self
    }

    pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_history = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for the operations that take an ID and an optional
/// `include_history` query parameter.
///
/// Used by [get_api_key][crate::client::IamIdentity::get_api_key] and
/// [get_service_id][crate::client::IamIdentity::get_service_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct GetOptions {
    /// Unique ID of the resource.
    pub id: Option<String>,
    /// Defines if the entity history is included in the response.
    pub include_history: Option<bool>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl GetOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_history = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for the operations that only take an ID.
///
/// Used by the delete, lock, and unlock operations on API keys and service
/// IDs.
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct IdOptions {
    /// Unique ID of the resource.
    pub id: Option<String>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl IdOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for [update_api_key][crate::client::IamIdentity::update_api_key].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateApiKeyOptions {
    /// Unique ID of the API key to be updated.
    pub id: Option<String>,
    /// Version of the API key to be updated, the `If-Match` header. Use `*` to
    /// update any version.
    pub if_match: Option<String>,
    /// The name of the API key to update. If specified in the request the
    /// parameter must not be empty.
    pub name: Option<String>,
    /// The description of the API key to update. If specified an empty
    /// description will clear the description of the API key.
    pub description: Option<String>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl UpdateApiKeyOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for [list_service_ids][crate::client::IamIdentity::list_service_ids].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct ListServiceIdsOptions {
    /// Account ID of the service ID(s) to query.
    pub account_id: Option<String>,
    /// Name of the service ID(s) to query.
    pub name: Option<String>,
    /// Optional size of a single page. Default is 20 items per page.
    pub pagesize: Option<i64>,
    /// Optional prev or next page token returned from a previous query
    /// execution.
    pub pagetoken: Option<String>,
    /// Optional sort property, valid values are `name`, `description`,
    /// `created_at` and `modified_at`.
    pub sort: Option<String>,
    pub order: Option<ListServiceIdsOrder>,
    /// Defines if the entity history is included in the response.
    pub include_history: Option<bool>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl ListServiceIdsOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_pagesize<T: Into<i64>>(mut self, v: T) -> Self {
        self.pagesize = Some(v.into());
        self
    }

    pub fn set_pagetoken<T: Into<String>>(mut self, v: T) -> Self {
        self.pagetoken = Some(v.into());
        self
    }

    pub fn set_sort<T: Into<String>>(mut self, v: T) -> Self {
        self.sort = Some(v.into());
        self
    }

    pub fn set_order(mut self, v: ListServiceIdsOrder) -> Self {
        self.order = Some(v);
        self
    }

    pub fn set_include_history<T: Into<bool>>(mut self, v: T) -> Self {
        self.include_history = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for [create_service_id][crate::client::IamIdentity::create_service_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct CreateServiceIdOptions {
    /// ID of the account the service ID belongs to.
    pub account_id: Option<String>,
    /// Name of the Service Id. The name is not checked for uniqueness.
    pub name: Option<String>,
    /// The optional description of the Service Id.
    pub description: Option<String>,
    /// Optional list of CRNs (string array) which point to the services
    /// connected to the service ID.
    pub unique_instance_crns: Option<Vec<String>>,
    /// Parameters for the API key in the Create service Id V1 REST request.
    pub apikey: Option<CreateApiKeyRequest>,
    /// Indicates if the service ID is locked for further write operations.
    /// The `Entity-Lock` header, `"true"` or `"false"`.
    pub entity_lock: Option<String>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl CreateServiceIdOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_account_id<T: Into<String>>(mut self, v: T) -> Self {
        self.account_id = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_unique_instance_crns<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unique_instance_crns = Some(v.into_iter().map(|v| v.into()).collect());
        self
    }

    pub fn set_apikey<T: Into<CreateApiKeyRequest>>(mut self, v: T) -> Self {
        self.apikey = Some(v.into());
        self
    }

    pub fn set_entity_lock<T: Into<String>>(mut self, v: T) -> Self {
        self.entity_lock = Some(v.into());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// The options for [update_service_id][crate::client::IamIdentity::update_service_id].
#[derive(Clone, Debug, Default, PartialEq)]
#[non_exhaustive]
pub struct UpdateServiceIdOptions {
    /// Unique ID of the service ID to be updated.
    pub id: Option<String>,
    /// Version of the service ID to be updated, the `If-Match` header. Use `*`
    /// to update any version.
    pub if_match: Option<String>,
    /// The name of the service ID to update. If specified in the request the
    /// parameter must not be empty.
    pub name: Option<String>,
    /// The description of the service ID to update. If specified an empty
    /// description will clear the description of the service ID.
    pub description: Option<String>,
    /// List of CRNs which point to the services connected to this service ID.
    /// If specified an empty list will clear all existing unique instance CRNs
    /// of the service ID.
    pub unique_instance_crns: Option<Vec<String>>,
    /// Custom headers sent with the request.
    pub headers: HashMap<String, String>,
}

impl UpdateServiceIdOptions {
    pub fn new() -> Self {
        std::default::Default::default()
    }

    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = Some(v.into());
        self
    }

    pub fn set_if_match<T: Into<String>>(mut self, v: T) -> Self {
        self.if_match = Some(v.into());
        self
    }

    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = Some(v.into());
        self
    }

    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = Some(v.into());
        self
    }

    pub fn set_unique_instance_crns<I, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.unique_instance_crns = Some(v.into_iter().map(|v| v.into()).collect());
        self
    }

    pub fn set_headers<I, K, V>(mut self, v: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;
    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn api_key_list_from_json() -> TestResult {
        let input = json!({
            "context": {"transaction_id": "tx-123", "unknown_field": 42},
            "offset": 0,
            "limit": 1,
            "next": "https://iam.cloud.ibm.com/v1/apikeys?pagetoken=abc",
            "apikeys": [{
                "id": "ID",
                "crn": "CRN",
                "locked": true,
                "name": "my-key",
                "iam_id": "IBMid-123",
                "history": [{
                    "timestamp": "2025-01-01T00:00:00Z",
                    "action": "create",
                    "params": ["a", "b"],
                }],
                "some_new_field": "ignored",
            }],
        });
        let got = serde_json::from_value::<ApiKeyList>(input)?;
        let keys = got.apikeys.as_deref().unwrap_or_default();
        assert_eq!(keys.len(), 1);
        assert_eq!(keys[0].id.as_deref(), Some("ID"));
        assert_eq!(keys[0].crn.as_deref(), Some("CRN"));
        assert_eq!(keys[0].locked, Some(true));
        assert_eq!(keys[0].description, None);
        let history = keys[0].history.as_deref().unwrap_or_default();
        assert_eq!(
            history[0].params,
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            got.context.and_then(|c| c.transaction_id).as_deref(),
            Some("tx-123")
        );
        assert_eq!(got.offset, Some(0));
        assert_eq!(got.first, None);
        Ok(())
    }

    #[test]
    fn absent_fields_are_not_serialized() -> TestResult {
        let input = CreateApiKeyRequest::new()
            .set_name("my-key")
            .set_store_value(false);
        let got = serde_json::to_value(&input)?;
        assert_eq!(got, json!({"name": "my-key", "store_value": false}));
        Ok(())
    }

    #[test]
    fn service_id_with_api_key() -> TestResult {
        let input = json!({
            "id": "ServiceId-123",
            "unique_instance_crns": ["crn:v1:a", "crn:v1:b"],
            "apikey": {"id": "ApiKey-123", "apikey": "secret"},
        });
        let got = serde_json::from_value::<ServiceId>(input)?;
        assert_eq!(got.id.as_deref(), Some("ServiceId-123"));
        assert_eq!(
            got.unique_instance_crns.as_deref().map(|v| v.len()),
            Some(2)
        );
        assert_eq!(
            got.apikey.and_then(|k| k.id).as_deref(),
            Some("ApiKey-123")
        );
        Ok(())
    }

    #[test_case(ListApiKeysScope::Entity, "entity")]
    #[test_case(ListApiKeysScope::Account, "account")]
    fn scope(input: ListApiKeysScope, want: &str) -> TestResult {
        use gaxi::query_parameter::QueryValue;
        assert_eq!(input.value(), want);
        assert_eq!(input.to_query_value(), want);
        assert_eq!(input.to_string(), want);
        assert_eq!(serde_json::to_value(input)?, json!(want));
        Ok(())
    }

    #[test_case(ListApiKeysType::User, "user")]
    #[test_case(ListApiKeysType::Serviceid, "serviceid")]
    fn api_key_type(input: ListApiKeysType, want: &str) {
        assert_eq!(input.value(), want);
    }

    #[test_case(ListApiKeysOrder::Asc, "asc")]
    #[test_case(ListApiKeysOrder::Desc, "desc")]
    fn order(input: ListApiKeysOrder, want: &str) {
        assert_eq!(input.value(), want);
    }

    #[test]
    fn options_setters() {
        let got = ListApiKeysOptions::new()
            .set_account_id("testString")
            .set_pagesize(38)
            .set_scope(ListApiKeysScope::Entity)
            .set_headers([("x-test", "value")]);
        assert_eq!(got.account_id.as_deref(), Some("testString"));
        assert_eq!(got.pagesize, Some(38));
        assert_eq!(got.scope, Some(ListApiKeysScope::Entity));
        assert_eq!(got.iam_id, None);
        assert_eq!(got.headers.get("x-test").map(String::as_str), Some("value"));

        let got = CreateServiceIdOptions::new()
            .set_unique_instance_crns(["crn:v1:a"])
            .set_apikey(CreateApiKeyRequest::new().set_name("key"));
        assert_eq!(
            got.unique_instance_crns,
            Some(vec!["crn:v1:a".to_string()])
        );
        assert_eq!(
            got.apikey.and_then(|k| k.name).as_deref(),
            Some("key")
        );
    }

    fn round_trip<T>(full: serde_json::Value) -> TestResult
    where
        T: serde::de::DeserializeOwned + serde::Serialize,
    {
        let decoded = serde_json::from_value::<T>(full.clone())?;
        assert_eq!(serde_json::to_value(decoded)?, full);
        Ok(())
    }

    #[test]
    fn api_key_round_trip() -> TestResult {
        round_trip::<ApiKey>(full_api_key())
    }

    #[test]
    fn api_key_list_round_trip() -> TestResult {
        round_trip::<ApiKeyList>(json!({
            "context": full_context(),
            "offset": 20,
            "limit": 10,
            "first": "https://iam.cloud.ibm.com/v1/apikeys",
            "previous": "https://iam.cloud.ibm.com/v1/apikeys?pagetoken=prev",
            "next": "https://iam.cloud.ibm.com/v1/apikeys?pagetoken=next",
            "apikeys": [full_api_key(), full_api_key()],
        }))
    }

    #[test]
    fn service_id_round_trip() -> TestResult {
        round_trip::<ServiceId>(full_service_id())
    }

    #[test]
    fn service_id_list_round_trip() -> TestResult {
        round_trip::<ServiceIdList>(json!({
            "context": full_context(),
            "offset": 0,
            "limit": 1,
            "first": "https://iam.cloud.ibm.com/v1/serviceids/",
            "previous": "https://iam.cloud.ibm.com/v1/serviceids/?pagetoken=prev",
            "next": "https://iam.cloud.ibm.com/v1/serviceids/?pagetoken=next",
            "serviceids": [full_service_id()],
        }))
    }

    #[test]
    fn all_fields_decoded() -> TestResult {
        let key = serde_json::from_value::<ApiKey>(full_api_key())?;
        assert_eq!(key.entity_tag.as_deref(), Some("2-a1b2c3"));
        assert_eq!(key.created_by.as_deref(), Some("IBMid-creator"));
        assert_eq!(key.modified_at.as_deref(), Some("2025-01-02T10:00+0000"));
        let context = key.context.unwrap_or_default();
        assert_eq!(context.thread_id.as_deref(), Some("thread-7"));
        assert_eq!(context.cluster_name.as_deref(), Some("iam-cluster-1"));
        assert_eq!(context.elapsed_time.as_deref(), Some("42"));
        let history = key.history.unwrap_or_default();
        assert_eq!(history.len(), 1, "{history:?}");
        assert_eq!(history[0].iam_id_account.as_deref(), Some("account-id"));
        assert_eq!(history[0].message.as_deref(), Some("created the API key"));
        assert_eq!(
            history[0].params,
            Some(vec!["name".to_string(), "description".to_string()])
        );
        Ok(())
    }

    fn full_context() -> serde_json::Value {
        json!({
            "transaction_id": "tx-123",
            "operation": "get_api_key",
            "user_agent": "ibm-cloud-iam-identity-v1",
            "url": "https://iam.cloud.ibm.com/v1/apikeys/ApiKey-123",
            "instance_id": "instance-1",
            "thread_id": "thread-7",
            "host": "iam-host-1",
            "start_time": "1700000000000",
            "end_time": "1700000000042",
            "elapsed_time": "42",
            "cluster_name": "iam-cluster-1",
        })
    }

    fn full_history() -> serde_json::Value {
        json!([{
            "timestamp": "2025-01-01T10:00+0000",
            "iam_id": "IBMid-creator",
            "iam_id_account": "account-id",
            "action": "create",
            "params": ["name", "description"],
            "message": "created the API key",
        }])
    }

    fn full_api_key() -> serde_json::Value {
        json!({
            "context": full_context(),
            "id": "ApiKey-123",
            "entity_tag": "2-a1b2c3",
            "crn": "crn:v1:bluemix:public:iam-identity::a/account-id::apikey:ApiKey-123",
            "locked": true,
            "created_at": "2025-01-01T10:00+0000",
            "created_by": "IBMid-creator",
            "modified_at": "2025-01-02T10:00+0000",
            "name": "my-key",
            "description": "used by the deployment pipeline",
            "iam_id": "IBMid-owner",
            "account_id": "account-id",
            "apikey": "secret-value",
            "history": full_history(),
        })
    }

    fn full_service_id() -> serde_json::Value {
        json!({
            "context": full_context(),
            "id": "ServiceId-123",
            "iam_id": "iam-ServiceId-123",
            "entity_tag": "1-d4e5f6",
            "crn": "crn:v1:bluemix:public:iam-identity::a/account-id::serviceid:ServiceId-123",
            "locked": false,
            "created_at": "2025-01-01T10:00+0000",
            "modified_at": "2025-01-03T10:00+0000",
            "account_id": "account-id",
            "name": "my-service-id",
            "description": "runs the nightly jobs",
            "unique_instance_crns": ["crn:v1:test:1", "crn:v1:test:2"],
            "history": full_history(),
            "apikey": full_api_key(),
        })
    }
}
