//! Amazon Managed Service for Prometheus (`aps`, REST-JSON, 2020-08-01).

use super::{HttpMethod::*, Member, Operation, Paginator, Protocol, ServiceModel};

pub static SERVICE: ServiceModel = ServiceModel {
    name: "amp",
    endpoint_prefix: "aps",
    signing_name: "aps",
    api_version: "2020-08-01",
    protocol: Protocol::RestJson1,
    target_prefix: None,
    env_suffix: "AMP",
    operations: &[
        &CREATE_ALERT_MANAGER_DEFINITION,
        &CREATE_LOGGING_CONFIGURATION,
        &CREATE_RULE_GROUPS_NAMESPACE,
        &CREATE_WORKSPACE,
        &DELETE_ALERT_MANAGER_DEFINITION,
        &DELETE_LOGGING_CONFIGURATION,
        &DELETE_RULE_GROUPS_NAMESPACE,
        &DELETE_WORKSPACE,
        &DESCRIBE_ALERT_MANAGER_DEFINITION,
        &DESCRIBE_LOGGING_CONFIGURATION,
        &DESCRIBE_RULE_GROUPS_NAMESPACE,
        &DESCRIBE_WORKSPACE,
        &LIST_RULE_GROUPS_NAMESPACES,
        &LIST_TAGS_FOR_RESOURCE,
        &LIST_WORKSPACES,
        &PUT_ALERT_MANAGER_DEFINITION,
        &PUT_RULE_GROUPS_NAMESPACE,
        &TAG_RESOURCE,
        &UNTAG_RESOURCE,
        &UPDATE_LOGGING_CONFIGURATION,
        &UPDATE_WORKSPACE_ALIAS,
    ],
};

const CLIENT_TOKEN_BODY: Member = Member::body("clientToken").idempotency_token();
const CLIENT_TOKEN_QUERY: Member = Member::query("clientToken", "clientToken").idempotency_token();

pub const CREATE_ALERT_MANAGER_DEFINITION: Operation = Operation {
    name: "CreateAlertManagerDefinition",
    method: Post,
    uri: "/workspaces/{workspaceId}/alertmanager/definition",
    members: &[
        Member::label("workspaceId"),
        Member::body("data").required(),
        CLIENT_TOKEN_BODY,
    ],
    paginator: None,
};

pub const CREATE_LOGGING_CONFIGURATION: Operation = Operation {
    name: "CreateLoggingConfiguration",
    method: Post,
    uri: "/workspaces/{workspaceId}/logging",
    members: &[
        Member::label("workspaceId"),
        Member::body("logGroupArn").required(),
        CLIENT_TOKEN_BODY,
    ],
    paginator: None,
};

pub const CREATE_RULE_GROUPS_NAMESPACE: Operation = Operation {
    name: "CreateRuleGroupsNamespace",
    method: Post,
    uri: "/workspaces/{workspaceId}/rulegroupsnamespaces",
    members: &[
        Member::label("workspaceId"),
        Member::body("name").required(),
        Member::body("data").required(),
        CLIENT_TOKEN_BODY,
        Member::body("tags"),
    ],
    paginator: None,
};

pub const CREATE_WORKSPACE: Operation = Operation {
    name: "CreateWorkspace",
    method: Post,
    uri: "/workspaces",
    members: &[
        Member::body("alias"),
        CLIENT_TOKEN_BODY,
        Member::body("tags"),
        Member::body("kmsKeyArn"),
    ],
    paginator: None,
};

pub const DELETE_ALERT_MANAGER_DEFINITION: Operation = Operation {
    name: "DeleteAlertManagerDefinition",
    method: Delete,
    uri: "/workspaces/{workspaceId}/alertmanager/definition",
    members: &[Member::label("workspaceId"), CLIENT_TOKEN_QUERY],
    paginator: None,
};

pub const DELETE_LOGGING_CONFIGURATION: Operation = Operation {
    name: "DeleteLoggingConfiguration",
    method: Delete,
    uri: "/workspaces/{workspaceId}/logging",
    members: &[Member::label("workspaceId"), CLIENT_TOKEN_QUERY],
    paginator: None,
};

pub const DELETE_RULE_GROUPS_NAMESPACE: Operation = Operation {
    name: "DeleteRuleGroupsNamespace",
    method: Delete,
    uri: "/workspaces/{workspaceId}/rulegroupsnamespaces/{name}",
    members: &[
        Member::label("workspaceId"),
        Member::label("name"),
        CLIENT_TOKEN_QUERY,
    ],
    paginator: None,
};

pub const DELETE_WORKSPACE: Operation = Operation {
    name: "DeleteWorkspace",
    method: Delete,
    uri: "/workspaces/{workspaceId}",
    members: &[Member::label("workspaceId"), CLIENT_TOKEN_QUERY],
    paginator: None,
};

pub const DESCRIBE_ALERT_MANAGER_DEFINITION: Operation = Operation {
    name: "DescribeAlertManagerDefinition",
    method: Get,
    uri: "/workspaces/{workspaceId}/alertmanager/definition",
    members: &[Member::label("workspaceId")],
    paginator: None,
};

pub const DESCRIBE_LOGGING_CONFIGURATION: Operation = Operation {
    name: "DescribeLoggingConfiguration",
    method: Get,
    uri: "/workspaces/{workspaceId}/logging",
    members: &[Member::label("workspaceId")],
    paginator: None,
};

pub const DESCRIBE_RULE_GROUPS_NAMESPACE: Operation = Operation {
    name: "DescribeRuleGroupsNamespace",
    method: Get,
    uri: "/workspaces/{workspaceId}/rulegroupsnamespaces/{name}",
    members: &[Member::label("workspaceId"), Member::label("name")],
    paginator: None,
};

pub const DESCRIBE_WORKSPACE: Operation = Operation {
    name: "DescribeWorkspace",
    method: Get,
    uri: "/workspaces/{workspaceId}",
    members: &[Member::label("workspaceId")],
    paginator: None,
};

pub const LIST_RULE_GROUPS_NAMESPACES: Operation = Operation {
    name: "ListRuleGroupsNamespaces",
    method: Get,
    uri: "/workspaces/{workspaceId}/rulegroupsnamespaces",
    members: &[
        Member::label("workspaceId"),
        Member::query("name", "name"),
        Member::query("nextToken", "nextToken"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const LIST_TAGS_FOR_RESOURCE: Operation = Operation {
    name: "ListTagsForResource",
    method: Get,
    uri: "/tags/{resourceArn}",
    members: &[Member::label("resourceArn")],
    paginator: None,
};

pub const LIST_WORKSPACES: Operation = Operation {
    name: "ListWorkspaces",
    method: Get,
    uri: "/workspaces",
    members: &[
        Member::query("nextToken", "nextToken"),
        Member::query("alias", "alias"),
        Member::query("maxResults", "maxResults"),
    ],
    paginator: Some(Paginator::next_token()),
};

pub const PUT_ALERT_MANAGER_DEFINITION: Operation = Operation {
    name: "PutAlertManagerDefinition",
    method: Put,
    uri: "/workspaces/{workspaceId}/alertmanager/definition",
    members: &[
        Member::label("workspaceId"),
        Member::body("data").required(),
        CLIENT_TOKEN_BODY,
    ],
    paginator: None,
};

pub const PUT_RULE_GROUPS_NAMESPACE: Operation = Operation {
    name: "PutRuleGroupsNamespace",
    method: Put,
    uri: "/workspaces/{workspaceId}/rulegroupsnamespaces/{name}",
    members: &[
        Member::label("workspaceId"),
        Member::label("name"),
        Member::body("data").required(),
        CLIENT_TOKEN_BODY,
    ],
    paginator: None,
};

pub const TAG_RESOURCE: Operation = Operation {
    name: "TagResource",
    method: Post,
    uri: "/tags/{resourceArn}",
    members: &[
        Member::label("resourceArn"),
        Member::body("tags").required(),
    ],
    paginator: None,
};

pub const UNTAG_RESOURCE: Operation = Operation {
    name: "UntagResource",
    method: Delete,
    uri: "/tags/{resourceArn}",
    members: &[
        Member::label("resourceArn"),
        Member::query("tagKeys", "tagKeys").required(),
    ],
    paginator: None,
};

pub const UPDATE_LOGGING_CONFIGURATION: Operation = Operation {
    name: "UpdateLoggingConfiguration",
    method: Put,
    uri: "/workspaces/{workspaceId}/logging",
    members: &[
        Member::label("workspaceId"),
        Member::body("logGroupArn").required(),
        CLIENT_TOKEN_BODY,
    ],
    paginator: None,
};

pub const UPDATE_WORKSPACE_ALIAS: Operation = Operation {
    name: "UpdateWorkspaceAlias",
    method: Post,
    uri: "/workspaces/{workspaceId}/alias",
    members: &[
        Member::label("workspaceId"),
        Member::body("alias"),
        CLIENT_TOKEN_BODY,
    ],
    paginator: None,
};
